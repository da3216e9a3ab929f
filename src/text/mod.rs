pub(crate) mod builtin;
pub(crate) mod mask;
pub(crate) mod outline;
pub(crate) mod resolver;
