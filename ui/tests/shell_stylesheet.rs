#![cfg(test)]
/*!
Stylesheet lint for the page shell.

The shell components emit a fixed set of class names (`nav-item--active`,
`nav-cover--from-left`, `theme-switch--pending`, ...). Renaming a class in the
markup without updating `assets/styling/shell.css` (or the reverse) silently
breaks styling, so this test keeps the two in step.

If you intentionally rename or remove a selector, update the component markup
and REQUIRED_SELECTORS together.
*/

const SHELL_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/shell.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Theme tokens
    ":root",
    ".dark {",
    // Frame
    ".shell__frame",
    ".shell__nav",
    ".shell__main",
    ".skip-nav",
    ".skip-nav:focus",
    // Desktop menu
    ".nav-group {",
    ".nav-group__entry",
    ".nav-item--active",
    ".nav-item--inactive",
    ".nav-cover {",
    ".nav-cover--appear",
    ".nav-cover--from-left",
    ".nav-cover--from-right",
    // Theme switch
    ".theme-switch {",
    ".theme-switch--pending",
    // Mobile menu
    ".mobile-menu__burger",
    ".mobile-menu__burger--open",
    ".mobile-menu__item--active",
    // Footer
    ".footer {",
    ".footer__columns",
    ".footer__link",
    // Breakpoint that swaps the mobile menu for the desktop one
    "@media (min-width: 768px)",
];

#[test]
fn shell_stylesheet_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !SHELL_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required selectors in shell.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn every_cover_animation_has_keyframes() {
    for name in ["nav-cover-appear", "nav-cover-from-left", "nav-cover-from-right"] {
        assert!(
            SHELL_CSS.contains(&format!("@keyframes {name}")),
            "keyframes `{name}` missing"
        );
    }
}

#[test]
fn slide_classes_match_stylesheet() {
    use ui::core::hover::Slide;

    for slide in [Slide::Appear, Slide::FromLeft, Slide::FromRight] {
        let selector = format!(".{}", slide.css_class());
        assert!(SHELL_CSS.contains(&selector), "no rule for `{selector}`");
    }
}
