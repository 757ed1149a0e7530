use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document_root() -> Result<web_sys::Element, DomError> {
    window()?
        .document()
        .and_then(|doc| doc.document_element())
        .ok_or(DomError::NoDocument)
}

/// Something whose scrolling can be switched off and back on.
pub trait LockTarget {
    fn engage(&self);
    fn release(&self);
}

pub const SCROLL_LOCK_CLASS: &str = "overflow-hidden";

/// The `<html>` element; locking adds a class that hides overflow.
pub struct DocumentRoot(web_sys::Element);

impl DocumentRoot {
    pub fn get() -> Result<Self, DomError> {
        document_root().map(Self)
    }
}

impl LockTarget for DocumentRoot {
    fn engage(&self) {
        if let Err(e) = self.0.class_list().add_1(SCROLL_LOCK_CLASS) {
            log::warn!("Failed to lock page scroll: {:?}", e);
        }
    }

    fn release(&self) {
        if let Err(e) = self.0.class_list().remove_1(SCROLL_LOCK_CLASS) {
            log::warn!("Failed to unlock page scroll: {:?}", e);
        }
    }
}

/// Holds background scroll off for as long as it lives.
pub struct ScrollLock<T: LockTarget> {
    target: T,
}

impl<T: LockTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        target.engage();
        Self { target }
    }
}

impl<T: LockTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.release();
    }
}
