use gtk::gdk;
use gtk4 as gtk;

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.bloom-window {
    background-color: #1E1E24;
}

.bloom-drawing-area {
    background: none;
    background-color: transparent;
}

.bloom-choice {
    color: #CCCCCC;
    font-size: 16px;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
