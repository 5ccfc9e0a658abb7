use mail_labels::utils::color::swatch_to_color;
use ratatui::style::Color;

#[test]
fn test_swatch_to_color() {
    assert_eq!(swatch_to_color("#7272a7"), Color::Rgb(0x72, 0x72, 0xa7));
    assert_eq!(swatch_to_color("#FFF"), Color::Rgb(255, 255, 255));
    assert_eq!(swatch_to_color("#0a0"), Color::Rgb(0, 170, 0));
}

#[test]
fn test_invalid_swatch_falls_back_to_gray() {
    assert_eq!(swatch_to_color("red"), Color::Gray);
    assert_eq!(swatch_to_color("#12345"), Color::Gray);
    assert_eq!(swatch_to_color("#ééé"), Color::Gray);
}
