mod scatter_gather;

pub use scatter_gather::scatter_gather;
