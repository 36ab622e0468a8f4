use std::fmt;
use std::hash::Hash;

/// Identity of a graph vertex
///
/// The graph only ever compares and hashes identities; it never looks
/// inside them. `is_absent` is the hook for identities that carry no
/// value (an empty name), which mutators reject as invalid arguments.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug + fmt::Display {
    fn is_absent(&self) -> bool {
        false
    }
}

impl Vertex for String {
    fn is_absent(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Vertex for &str {
    fn is_absent(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Vertex for char {}

macro_rules! impl_integer_vertex {
    ($($ty:ty),*) => {
        $(impl Vertex for $ty {})*
    };
}

impl_integer_vertex!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
