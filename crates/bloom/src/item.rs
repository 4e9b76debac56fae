use crate::icon::IconName;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
    AsRef,
)]
#[serde(transparent)]
pub struct Label(String);

crate::impl_string_newtype!(Label);

/// One option on the ring. Lengths are in surface pixels and describe the
/// fully expanded state.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub text: Label,
    pub radius: f64,
    pub icon: Option<IconName>,
    pub angle_degrees: i32,
    pub distance: f64,
}

impl Item {
    pub fn new(
        text: impl Into<Label>,
        radius: f64,
        icon: Option<IconName>,
        angle_degrees: i32,
        distance: f64,
    ) -> Self {
        Self {
            text: text.into(),
            radius,
            icon,
            angle_degrees,
            distance,
        }
    }
}
