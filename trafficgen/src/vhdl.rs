//! VHDL text IR for the emitted destination packages.
//!
//! The textual grammar is a fixed contract consumed by the downstream
//! hardware toolchain: 20 entries per line, per-line trailing punctuation and
//! blank-line placement are all significant and reproduced exactly.

use crate::pattern::{DestinationList, DestinationTable};

const NUMS_PER_LINE: usize = 20;

/// Comment banner at the top of every generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Logical VHDL file name recorded in the banner.
    pub file: String,

    /// Creation date, `d/m/yyyy`.
    pub created: String,

    /// Last-changed date, `d/m/yyyy`.
    pub last_changed: String,

    /// Author attribution; the first line sits against the `Author:` label,
    /// the rest continue underneath it.
    pub author: Vec<String>,

    /// Free-form note lines; an empty string renders as a bare `--`.
    pub notes: Vec<String>,
}

impl ToString for Banner {
    fn to_string(&self) -> String {
        let rule = "-".repeat(82);
        let mut lines = vec![rule.clone()];
        lines.push(format!("--  {:<16}{}", "File:", self.file));
        lines.push(format!("--  {:<16}{}", "Created:", self.created));
        lines.push(format!("--  {:<16}{}", "Last Changed:", self.last_changed));
        for (index, author) in self.author.iter().enumerate() {
            let label = if index == 0 { "Author:" } else { "" };
            lines.push(format!("--  {:<16}{}", label, author));
        }
        for note in &self.notes {
            if note.is_empty() {
                lines.push("--".to_string());
            } else {
                lines.push(format!("--  {}", note));
            }
        }
        lines.push(rule);
        lines.join("\n")
    }
}

/// Declaration inside a generated package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageItem {
    /// Unconstrained array of mesh node ids.
    NodeArrayType {
        /// Type identifier.
        name: String,
    },

    /// Array of per-source rows over an element array type of `len` entries.
    TableType {
        /// Type identifier.
        name: String,

        /// Element array type identifier.
        element: String,

        /// Entries per row.
        len: usize,
    },

    /// Single shared destination array constant.
    ArrayConstant {
        /// Constant identifier.
        name: String,

        /// Array type identifier.
        typ: String,

        /// Destination node ids.
        values: Vec<u32>,
    },

    /// Per-source destination table constant.
    TableConstant {
        /// Constant identifier.
        name: String,

        /// Table type identifier.
        typ: String,

        /// Destination rows, indexed by source node id.
        rows: Vec<Vec<u32>>,
    },
}

impl ToString for PackageItem {
    fn to_string(&self) -> String {
        match self {
            PackageItem::NodeArrayType { name } => {
                format!("type    {} is array(integer range <>) of integer range 0 to RADIX*RADIX*RADIX-1;\n", name)
            }
            PackageItem::TableType { name, element, len } => {
                format!("type    {} is array(integer range <>) of {}(0 to {});\n", name, element, len - 1)
            }
            PackageItem::ArrayConstant { name, typ, values } => {
                format!("constant {} : {}(0 to {}) := (\n{}", name, typ, values.len() - 1, gen_array_literal(values))
            }
            PackageItem::TableConstant { name, typ, rows } => {
                format!("constant {} : {}(0 to {}) := (\n{}", name, typ, rows.len() - 1, gen_table_literal(rows))
            }
        }
    }
}

/// Generates the flat array literal, wrapped at 20 entries per line.
fn gen_array_literal(values: &[u32]) -> String {
    let size = values.len();
    let mut out = String::new();
    for (index, value) in values.iter().enumerate() {
        if index < size - 1 {
            out.push_str(&format!("{}, ", value));
        } else {
            out.push_str(&format!("{}); ", value));
        }
        if (index + 1) % NUMS_PER_LINE == 0 || index == size - 1 {
            out.push('\n');
        }
    }
    out
}

/// Generates the 2D table literal: one parenthesized row per source, wrapped
/// at 20 entries per line, a blank line after each row.
fn gen_table_literal(rows: &[Vec<u32>]) -> String {
    let row_count = rows.len();
    let mut out = String::new();
    for (k, row) in rows.iter().enumerate() {
        let last_row = k == row_count - 1;
        let size = row.len();
        out.push('(');
        for (index, value) in row.iter().enumerate() {
            if index < size - 1 {
                out.push_str(&format!("{}, ", value));
            } else if !last_row {
                out.push_str(&format!("{}), ", value));
            } else {
                out.push_str(&format!("{}) ", value));
            }
            if (index + 1) % NUMS_PER_LINE == 0 || index == size - 1 {
                out.push('\n');
            }
        }
        if last_row {
            out.push_str(");\n");
        }
        out.push('\n');
    }
    out
}

/// A generated VHDL package together with the artifact file that holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VhdlPackage {
    /// Name of the emitted file.
    pub file_name: String,

    /// Package identifier.
    pub name: String,

    /// Comment banner.
    pub banner: Banner,

    /// Declarations of the package body.
    pub items: Vec<PackageItem>,
}

impl ToString for VhdlPackage {
    fn to_string(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.banner.to_string());
        out.push('\n');
        out.push('\n');
        out.push_str("use work.common.all;\n");
        out.push('\n');
        out.push_str(&format!("package {} is\n", self.name));
        out.push('\n');
        for item in &self.items {
            out.push_str(&item.to_string());
        }
        out.push('\n');
        out.push_str("end package;\n");
        out
    }
}

impl VhdlPackage {
    /// Package holding the per-source RENT destination table.
    pub fn rent(table: &DestinationTable, banner: Banner) -> Self {
        VhdlPackage {
            file_name: format!("destinations_rent_{}.txt", table.radix()),
            name: "destinations_rent".to_string(),
            banner,
            items: vec![
                PackageItem::NodeArrayType { name: "INT_RADIX3_ARRAY".to_string() },
                PackageItem::TableType {
                    name: "INT_RADIX3_ARRAY_T".to_string(),
                    element: "INT_RADIX3_ARRAY".to_string(),
                    len: table.size(),
                },
                PackageItem::TableConstant {
                    name: "DESTINATIONS_RENT".to_string(),
                    typ: "INT_RADIX3_ARRAY_T".to_string(),
                    rows: table.rows().to_vec(),
                },
            ],
        }
    }

    /// Package holding the shared hotspot destination array.
    pub fn hotspot(list: &DestinationList, banner: Banner) -> Self {
        VhdlPackage {
            file_name: format!("destinations_hotspot_{}.txt", list.radix()),
            name: "destinations".to_string(),
            banner,
            items: vec![
                PackageItem::NodeArrayType { name: "INT_RADIX3_ARRAY".to_string() },
                PackageItem::ArrayConstant {
                    name: "DESTINATIONS".to_string(),
                    typ: "INT_RADIX3_ARRAY".to_string(),
                    values: list.entries().to_vec(),
                },
            ],
        }
    }
}
