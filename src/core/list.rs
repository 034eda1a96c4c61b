use crate::config::Config;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::{HEADERS, WorkRecord};
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, RESET, colorize_optional};
use crate::utils::table::Table;

pub struct ListLogic;

impl ListLogic {
    /// Re-read every record and print it as a table.
    pub fn print_all(store: &RecordStore, cfg: &Config) -> AppResult<()> {
        let records = store.list_all()?;

        if records.is_empty() {
            info("No records stored yet.");
            return Ok(());
        }

        print!("{}", Self::render_table(&records, cfg));
        println!("{} record(s)", records.len());
        Ok(())
    }

    pub fn render_table(records: &[WorkRecord], cfg: &Config) -> String {
        let mut table = Table::with_headers(&HEADERS).separator(&cfg.separator_char);
        for r in records {
            table.add_row(r.to_row(), cfg.max_column_width);
        }
        table.render()
    }

    /// Full view of one record; long text is wrapped instead of cut.
    pub fn print_one(record: &WorkRecord) {
        header(format!("Record #{}", record.id));

        let field = |label: &str, value: &str| {
            println!("{}{:<12}{} {}", CYAN, label, RESET, value);
        };
        field("Date:", record.date.as_str());
        field("Name:", record.name.as_str());
        field("Department:", record.department.as_str());

        for (label, text) in [
            ("Description:", &record.description),
            ("Summary:", &record.summary),
        ] {
            println!("{}{}{}", CYAN, label, RESET);
            if text.trim().is_empty() {
                println!("  {}", colorize_optional(text));
            } else {
                for line in textwrap::wrap(text, 76) {
                    println!("  {}", line);
                }
            }
        }
    }
}
