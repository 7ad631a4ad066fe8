use super::Formatter;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_cql($f);
        )*
    }};
}

pub(super) trait ToCql {
    fn to_cql(self, f: &mut Formatter<'_>);
}

impl ToCql for &str {
    fn to_cql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToCql for &String {
    fn to_cql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToCql for usize {
    fn to_cql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self.to_string());
    }
}

impl<T: ToCql> ToCql for Option<T> {
    fn to_cql(self, f: &mut Formatter<'_>) {
        if let Some(inner) = self {
            inner.to_cql(f);
        }
    }
}
