//! The structural view of a value that the walk operates on.
//!
//! A [`Bindable`] value describes itself as one of three shapes: a record with
//! tagged fields, an optional reference that may or may not hold a record, or
//! anything else. `#[derive(Bindable)]` produces the record shape for structs,
//! the impls below cover `Option`, smart pointers and the common leaf types.
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ffi::{OsStr, OsString};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::num::{NonZeroU16, NonZeroU32, NonZeroU64, NonZeroUsize};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// A value that can describe its own structure to the walk.
///
/// Usually derived, see [`derive@crate::Bindable`].
pub trait Bindable {
    /// Called once per visit, an absent `Option` builds its stand-in here.
    fn shape(&self) -> Shape<'_>;
}

/// What a [`Bindable`] value looks like to the walk.
pub enum Shape<'a> {
    /// Fields in declaration order.
    Record(Vec<Field<'a>>),
    /// An optional reference, followed before deciding whether the target is a
    /// record.
    Pointer(Pointee<'a>),
    /// Anything that is neither a record nor an optional reference.
    Scalar,
}

/// The target of an optional reference.
pub enum Pointee<'a> {
    Present(&'a dyn Bindable),
    /// Stand-in for an absent reference. Only ever walked for its keys.
    Absent(Box<dyn Bindable + 'a>),
}

impl Pointee<'_> {
    /// The referenced value, or its stand-in if the reference is absent.
    pub fn get(&self) -> &dyn Bindable {
        match self {
            Self::Present(value) => *value,
            Self::Absent(value) => value.as_ref(),
        }
    }
}

/// One field of a record together with its tags.
pub struct Field<'a> {
    name: &'static str,
    tags: &'static [(&'static str, &'static str)],
    value: &'a dyn Bindable,
}

impl<'a> Field<'a> {
    /// `tags` pairs each tag name with its value, e.g. `("mapstructure", "port")`.
    pub fn new(
        name: &'static str,
        tags: &'static [(&'static str, &'static str)],
        value: &'a dyn Bindable,
    ) -> Self {
        Self { name, tags, value }
    }

    /// The field's name in the struct definition.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up the value of the tag `tag_name`, `None` if the field does not
    /// carry it.
    pub fn tag(&self, tag_name: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(name, _)| *name == tag_name)
            .map(|(_, value)| *value)
    }

    /// The field's value, walked if it is a record or an optional reference.
    pub fn value(&self) -> &'a dyn Bindable {
        self.value
    }
}

/// Marker used in place of the value of an `opaque` field.
///
/// The field still takes part in key derivation but its value is never
/// inspected, so its type does not need to implement [`Bindable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Opaque;

impl Bindable for Opaque {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar
    }
}

impl<T> Bindable for Option<T>
where
    T: Bindable + Default,
{
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => Shape::Pointer(Pointee::Present(value)),
            None => Shape::Pointer(Pointee::Absent(Box::new(T::default()))),
        }
    }
}

macro_rules! forward_impl {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T> Bindable for $ty
            where
                T: Bindable + ?Sized,
            {
                fn shape(&self) -> Shape<'_> {
                    (**self).shape()
                }
            }
        )*
    };
}

forward_impl!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

macro_rules! scalar_impl {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Bindable for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar
                }
            }
        )*
    };
}

scalar_impl!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroUsize,
    str,
    String,
    OsStr,
    OsString,
    Path,
    PathBuf,
    Duration,
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
    SocketAddrV4,
    SocketAddrV6,
);

impl Bindable for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar
    }
}

impl<T> Bindable for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar
    }
}

impl<T, const N: usize> Bindable for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar
    }
}

impl<T> Bindable for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar
    }
}

impl<T> Bindable for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar
    }
}

impl<T, S> Bindable for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar
    }
}

impl<T> Bindable for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar
    }
}

impl<K, V, S> Bindable for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar
    }
}

impl<K, V> Bindable for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Server {
        port: u16,
    }

    impl Bindable for Server {
        fn shape(&self) -> Shape<'_> {
            Shape::Record(vec![Field::new(
                "port",
                &[("mapstructure", "port"), ("config", "listen_port")],
                &self.port,
            )])
        }
    }

    #[test]
    fn field_tag_lookup() {
        let server = Server { port: 8080 };
        let Shape::Record(fields) = server.shape() else {
            panic!("expected a record");
        };

        assert_eq!(fields[0].name(), "port");
        assert_eq!(fields[0].tag("mapstructure"), Some("port"));
        assert_eq!(fields[0].tag("config"), Some("listen_port"));
        assert_eq!(fields[0].tag("yaml"), None);
    }

    #[test]
    fn absent_option_stands_in_default() {
        let server: Option<Server> = None;
        let Shape::Pointer(pointee) = server.shape() else {
            panic!("expected a pointer");
        };

        assert!(matches!(pointee, Pointee::Absent(_)));
        assert!(matches!(pointee.get().shape(), Shape::Record(_)));
    }

    #[test]
    fn smart_pointers_are_transparent() {
        let server = Arc::new(Box::new(Server::default()));

        assert!(matches!(server.shape(), Shape::Record(_)));
        assert!(matches!(Rc::new("foo").shape(), Shape::Scalar));
    }
}
