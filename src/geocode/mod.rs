mod resolver;
mod reverse_get;

pub use resolver::resolve;
