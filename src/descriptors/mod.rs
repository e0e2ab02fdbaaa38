//! IDL member descriptors.
//!
//! A descriptor is an attribute token in the bracketed list that prefixes an
//! IDL method or attribute, e.g. `[notxpcom] long getValue();`. Some of them
//! change the binary layout of the interface and therefore demand a new IID.
//!
//! The registry is built once from configuration and passed by reference to
//! the classifier and the patch driver.

mod registry;


pub use registry::DescriptorRegistry;
