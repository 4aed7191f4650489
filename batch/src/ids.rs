//! Call-site adapter accepting identifiers as single values or nested lists.

use legends_shared::Identifier;

/// Either a single identifier or an arbitrarily nested list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdArg {
    One(Identifier),
    Many(Vec<IdArg>),
}

impl From<Identifier> for IdArg {
    fn from(value: Identifier) -> Self {
        IdArg::One(value)
    }
}

impl From<&Identifier> for IdArg {
    fn from(value: &Identifier) -> Self {
        IdArg::One(value.clone())
    }
}

impl From<u64> for IdArg {
    fn from(value: u64) -> Self {
        IdArg::One(value.into())
    }
}

impl From<u32> for IdArg {
    fn from(value: u32) -> Self {
        IdArg::One(value.into())
    }
}

impl From<i32> for IdArg {
    fn from(value: i32) -> Self {
        IdArg::One(value.into())
    }
}

impl From<&str> for IdArg {
    fn from(value: &str) -> Self {
        IdArg::One(value.into())
    }
}

impl From<String> for IdArg {
    fn from(value: String) -> Self {
        IdArg::One(value.into())
    }
}

impl<T: Into<IdArg>> From<Vec<T>> for IdArg {
    fn from(value: Vec<T>) -> Self {
        IdArg::Many(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<IdArg>, const N: usize> From<[T; N]> for IdArg {
    fn from(value: [T; N]) -> Self {
        IdArg::Many(value.into_iter().map(Into::into).collect())
    }
}

impl IdArg {
    fn flatten_into(self, out: &mut Vec<Identifier>) {
        match self {
            IdArg::One(id) => out.push(id),
            IdArg::Many(args) => args.into_iter().for_each(|a| a.flatten_into(out)),
        }
    }
}

/// Flatten nested identifier arguments depth first, keeping their order.
pub fn flatten<I>(args: I) -> Vec<Identifier>
where
    I: IntoIterator,
    I::Item: Into<IdArg>,
{
    let mut out = Vec::new();
    for arg in args {
        arg.into().flatten_into(&mut out);
    }
    out
}
