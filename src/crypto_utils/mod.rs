pub mod signature;

pub use signature::RequestSigner;
