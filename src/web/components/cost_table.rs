//! Cost guide table.

use crate::domain::entities::CostTable;
use askama::Template;

/// Renders `templates/components/cost_table.html`, one `<tr>` per catalog row.
#[derive(Template)]
#[template(path = "components/cost_table.html")]
pub struct CostTableView<'a> {
    pub table: &'a CostTable,
}
