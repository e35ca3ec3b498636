mod hickory_mx_resolver;

pub use hickory_mx_resolver::HickoryMxResolver;
