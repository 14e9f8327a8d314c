//! Usage collection pass: drives the recognizers over each line and
//! accumulates occurrence counts in the shared [`UsageTable`].

use crate::core::{Dialect, UsageTable};
use crate::extract;

/// Count every class name recognized on `line` under the file's dialect.
///
/// Each occurrence contributes 1 to its class's count; the same token
/// appearing in different constructs or on different lines keeps
/// accumulating under the same key.
pub fn collect_line(line: &str, dialect: Dialect, table: &mut UsageTable) {
    match dialect {
        Dialect::Markup => {
            for found in extract::markup_class_attrs(line) {
                record_all(&found.classes, table);
            }
        }
        Dialect::Stylesheet => {
            for found in extract::stylesheet_selectors(line) {
                record_all(&found.classes, table);
            }
        }
        Dialect::Script => {
            for found in extract::query_selector_calls(line) {
                record_all(&found.classes, table);
            }
            for found in extract::class_list_calls(line) {
                record_all(&found.classes, table);
            }
            for found in extract::class_name_assignments(line) {
                record_all(&found.classes, table);
            }
        }
    }
}

/// Count every class name in a whole file's contents, line by line.
pub fn collect_file(content: &str, dialect: Dialect, table: &mut UsageTable) {
    for line in content.lines() {
        collect_line(line, dialect, table);
    }
}

fn record_all(classes: &[&str], table: &mut UsageTable) {
    for name in classes {
        table.record(name);
    }
}
