use std::{cell::RefCell, fmt::Display, rc::Rc};

use log::error;

pub type Shared<T> = Rc<RefCell<T>>;

pub trait OptionExt<T> {
    fn log_none(self, msg: &str) -> Self;
}

impl<T> OptionExt<T> for Option<T> {
    fn log_none(self, msg: &str) -> Self {
        if self.is_none() {
            error!("{}", msg);
        }
        self
    }
}

pub trait ResultExt<T, E> {
    fn log_err(self) -> Self
    where
        E: Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn log_err(self) -> Self
    where
        E: Display,
    {
        if let Err(err) = &self {
            error!("{}", err);
        }
        self
    }
}
