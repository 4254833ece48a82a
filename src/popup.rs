use crate::app::App;

#[derive(Debug)]
pub struct Popup {
    pub message: String,
    pub kind: PopupKind,
}
type Callback = Box<dyn FnOnce(&mut App)>;

impl std::fmt::Debug for PopupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PopupKind::YesNoPopup(_) => write!(f, "YesNoPopup(<callback>)"),
            PopupKind::ErrorPopup(e) => write!(f, "ErrorPopup({:?})", e),
        }
    }
}
pub enum PopupKind {
    YesNoPopup(Callback),
    ErrorPopup(crate::error::Error),
}
impl Popup {
    pub fn yes_no(message: String, callback: Callback) -> Self {
        Self {
            message,
            kind: PopupKind::YesNoPopup(callback),
        }
    }
}
impl From<crate::error::Error> for Popup {
    fn from(value: crate::error::Error) -> Self {
        Popup {
            message: value.to_string(),
            kind: PopupKind::ErrorPopup(value),
        }
    }
}
