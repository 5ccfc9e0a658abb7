use mail_labels::sanitize::{HtmlSanitizer, Sanitizer};

fn clean(input: &str) -> String {
    HtmlSanitizer::new().input(input)
}

#[test]
fn test_script_only_input_becomes_empty() {
    assert_eq!(clean("<script>alert('x')</script>"), "");
    assert_eq!(clean("<SCRIPT type=\"text/javascript\">steal()</SCRIPT>"), "");
    assert_eq!(clean("<img src=x onerror=alert(1)>"), "");
    assert_eq!(clean("<!-- hidden -->"), "");
}

#[test]
fn test_harmless_tags_keep_their_text() {
    assert_eq!(clean("<b>Work</b>"), "Work");
    assert_eq!(clean("<a href=\"https://example.com\">Link</a> name"), "Link name");
    assert_eq!(clean("<style>b{}</style>Styled"), "Styled");
}

#[test]
fn test_quoted_angle_brackets_inside_attributes() {
    assert_eq!(clean("<span title=\"a > b\">Inbox</span>"), "Inbox");
}

#[test]
fn test_stray_brackets_and_ampersands_are_kept() {
    assert_eq!(clean("a < b"), "a < b");
    assert_eq!(clean("5 > 3"), "5 > 3");
    assert_eq!(clean("Tom & Jerry"), "Tom & Jerry");
    assert_eq!(clean("<3 mail"), "<3 mail");
    assert_eq!(clean("&lt;b&gt;"), "&lt;b&gt;");
}

#[test]
fn test_sanitizing_twice_changes_nothing() {
    let inputs = [
        "Tom & Jerry",
        "<b>Bills</b> & more",
        "a < b > c",
        "<<script>script>alert(1)</script>",
        "Keep <b unfinished",
        "&amp; already escaped",
    ];
    for input in inputs {
        let once = clean(input);
        assert_eq!(clean(&once), once, "input: {input}");
    }
}

#[test]
fn test_spliced_markup_is_removed() {
    assert_eq!(clean("<<b>b>Inbox"), "Inbox");
}

#[test]
fn test_unterminated_tag_drops_the_rest() {
    assert_eq!(clean("Keep <b unfinished"), "Keep ");
}

#[test]
fn test_unicode_text_survives() {
    assert_eq!(clean("Rechnungen 📄 ünd Ärger"), "Rechnungen 📄 ünd Ärger");
}

#[test]
fn test_swatch_values_are_unchanged() {
    assert_eq!(clean("#7272a7"), "#7272a7");
}
