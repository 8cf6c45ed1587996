macro_rules! use_prelude {() => (
    use crate::utils::prelude::*;
)}

macro_rules! create_context {(
    $cx:ident
) => (
    let mut $cx = ::core::task::Context::from_waker(
        ::core::task::Waker::noop(),
    );
)}
