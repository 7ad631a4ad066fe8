use super::{Formatter, ToCql};

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// `AND` delimited
pub(super) struct And<L>(pub(super) L);

impl<L> ToCql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToCql,
{
    fn to_cql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ", ";
        }
    }
}

impl<L> ToCql for And<L>
where
    L: IntoIterator,
    L::Item: ToCql,
{
    fn to_cql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = " AND ";
        }
    }
}
