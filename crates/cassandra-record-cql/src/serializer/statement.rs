use super::{And, Comma, Formatter, ToCql};

use crate::stmt::{
    Assignment, CreateTable, Delete, Direction, Insert, Predicate, Projection, Select, Statement,
    Update,
};
use cassandra_record_core::schema::Column;

impl ToCql for &Statement {
    fn to_cql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_cql(f),
            Statement::Delete(stmt) => stmt.to_cql(f),
            Statement::Insert(stmt) => stmt.to_cql(f),
            Statement::Select(stmt) => stmt.to_cql(f),
            Statement::Update(stmt) => stmt.to_cql(f),
        }
    }
}

impl ToCql for &CreateTable {
    fn to_cql(self, f: &mut Formatter<'_>) {
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };

        let partition: Vec<_> = self.columns.iter().filter(|c| c.is_partition_key()).collect();
        let clustering: Vec<_> = self.columns.iter().filter(|c| c.is_clustering_key()).collect();

        fmt!(f, "CREATE TABLE " if_not_exists self.table.as_str() "(");

        // A lone partition key with no clustering columns is declared inline
        if let ([pk], []) = (&partition[..], &clustering[..]) {
            let defs = self.columns.iter().map(|column| ColumnDef {
                column,
                inline_pk: column.name == pk.name,
            });
            fmt!(f, Comma(defs) ")");
            return;
        }

        let defs = self.columns.iter().map(|column| ColumnDef {
            column,
            inline_pk: false,
        });
        fmt!(f, Comma(defs) ", PRIMARY KEY(");

        match &partition[..] {
            [pk] => fmt!(f, &pk.name),
            pks => fmt!(f, "(" Comma(pks.iter().map(|c| &c.name)) ")"),
        }

        for column in &clustering {
            fmt!(f, ", " column.name.as_str());
        }

        fmt!(f, "))");
    }
}

struct ColumnDef<'a> {
    column: &'a Column,
    inline_pk: bool,
}

impl ToCql for ColumnDef<'_> {
    fn to_cql(self, f: &mut Formatter<'_>) {
        let ty = self.column.ty.as_str().to_uppercase();
        fmt!(f, self.column.name.as_str() " " ty.as_str());
        if self.inline_pk {
            fmt!(f, " PRIMARY KEY");
        }
    }
}

impl ToCql for &Delete {
    fn to_cql(self, f: &mut Formatter<'_>) {
        fmt!(f, "DELETE ");
        if !self.columns.is_empty() {
            fmt!(f, Comma(&self.columns) " ");
        }
        fmt!(f, "FROM " self.table.as_str() Where(&self.filter));
    }
}

impl ToCql for &Insert {
    fn to_cql(self, f: &mut Formatter<'_>) {
        let columns = Comma(self.values.iter().map(|(column, _)| column));
        let values = Comma(self.values.iter().map(|(_, value)| value));

        fmt!(f, "INSERT INTO " self.table.as_str() "(" columns ") VALUES(" values ")");
    }
}

impl ToCql for &Select {
    fn to_cql(self, f: &mut Formatter<'_>) {
        fmt!(f, "SELECT ");
        if self.distinct {
            fmt!(f, "DISTINCT ");
        }

        match &self.projection {
            Projection::All => fmt!(f, "*"),
            Projection::Columns(columns) => fmt!(f, Comma(columns)),
            Projection::Count => fmt!(f, "COUNT(*)"),
        }

        fmt!(f, " FROM " self.table.as_str() Where(&self.filter));

        if !self.order_by.is_empty() {
            let entries = self.order_by.iter().map(|(column, direction)| OrderBy(column, *direction));
            fmt!(f, " ORDER BY " Comma(entries));
        }

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " limit);
        }
    }
}

impl ToCql for &Update {
    fn to_cql(self, f: &mut Formatter<'_>) {
        fmt!(f, "UPDATE " self.table.as_str() " SET " Comma(&self.assignments) Where(&self.filter));
    }
}

impl ToCql for &Assignment {
    fn to_cql(self, f: &mut Formatter<'_>) {
        match self {
            Assignment::Set { column, value } => fmt!(f, column " = " value),
            Assignment::Raw(cql) => fmt!(f, cql),
        }
    }
}

impl ToCql for &Predicate {
    fn to_cql(self, f: &mut Formatter<'_>) {
        match self {
            Predicate::Eq { column, value } => fmt!(f, column " = " value),
            Predicate::In { column, values } => fmt!(f, column " IN (" Comma(values) ")"),
            Predicate::Raw(cql) => fmt!(f, cql),
        }
    }
}

/// ` WHERE a AND b`, or nothing for an empty filter
struct Where<'a>(&'a [Predicate]);

impl ToCql for Where<'_> {
    fn to_cql(self, f: &mut Formatter<'_>) {
        if !self.0.is_empty() {
            fmt!(f, " WHERE " And(self.0));
        }
    }
}

struct OrderBy<'a>(&'a String, Direction);

impl ToCql for OrderBy<'_> {
    fn to_cql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0 " " self.1.as_str());
    }
}
