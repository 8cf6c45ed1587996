pub(in crate)
use ::core::{
    cell::Cell,
    future::Future,
    pin::Pin,
    task::{
        Context,
        Poll,
    },
};

pub(in crate)
use ::std::{
    collections::VecDeque,
    rc::Rc,
};

pub(in crate)
use crate::{
    emitter::Emitter,
    error::{
        Error,
        ProducerError,
    },
    utils::CellOption,
};
