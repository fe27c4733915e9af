use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::color::ColorToken;

pub const DEFAULT_HIGHLIGHT_COLOR: &str = "purple.500";

/// Application-wide theme value shared outside the configuration domains.
pub trait ThemeStore {
    fn highlight_color(&self) -> ColorToken;
    fn set_highlight_color(&self, color: ColorToken);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub highlight_color: ColorToken,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            highlight_color: ColorToken::from(DEFAULT_HIGHLIGHT_COLOR),
        }
    }
}

/// Cloneable handle; every clone reads and writes the same theme.
#[derive(Debug, Clone, Default)]
pub struct SharedTheme(Rc<RefCell<Theme>>);

impl SharedTheme {
    pub fn new(theme: Theme) -> Self {
        Self(Rc::new(RefCell::new(theme)))
    }

    pub fn snapshot(&self) -> Theme {
        self.0.borrow().clone()
    }
}

impl ThemeStore for SharedTheme {
    fn highlight_color(&self) -> ColorToken {
        self.0.borrow().highlight_color.clone()
    }

    fn set_highlight_color(&self, color: ColorToken) {
        debug!("highlight color -> {color}");
        self.0.borrow_mut().highlight_color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let theme = SharedTheme::default();
        let elsewhere = theme.clone();
        elsewhere.set_highlight_color(ColorToken::from("teal.300"));
        assert_eq!(theme.highlight_color(), ColorToken::from("teal.300"));
        assert_eq!(
            SharedTheme::default().highlight_color().as_str(),
            DEFAULT_HIGHLIGHT_COLOR
        );
    }
}
