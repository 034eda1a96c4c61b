use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(store: &RecordStore, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL RECORDS
    //
    let count = store.count()?;
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) PEOPLE / DEPARTMENTS
    //
    let (people, departments): (i64, i64) = store.conn.query_row(
        "SELECT COUNT(DISTINCT name), COUNT(DISTINCT department) FROM work_summary",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!("{}• People:{} {}", CYAN, RESET, people);
    println!("{}• Departments:{} {}", CYAN, RESET, departments);

    //
    // 4) DATE RANGE (dates are stored as entered, compared as text)
    //
    let (first_date, last_date): (Option<String>, Option<String>) = store.conn.query_row(
        "SELECT MIN(date), MAX(date) FROM work_summary",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
