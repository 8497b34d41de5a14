mod node;

pub(crate) use node::{Link, Node, clone_link, teardown};
