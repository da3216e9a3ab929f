pub(crate) mod batch;
pub(crate) mod compositor;
pub(crate) mod layout;
