use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use launchlab::analysis::{ClubRow, DispersionSummary, Gap, GapFlag, ShapeBreakdown, ShotShape};
use launchlab::library::{ImportReport, SessionSummary};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right_align(table: &mut Table, from: usize, to: usize) {
    for i in from..=to {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn opt(v: Option<f64>, decimals: usize) -> String {
    match v {
        Some(x) => format!("{:.*}", decimals, x),
        None => "-".to_string(),
    }
}

fn mean_sd(mean: Option<f64>, sd: Option<f64>, decimals: usize) -> String {
    match (mean, sd) {
        (Some(m), Some(s)) => format!("{:.*} ±{:.*}", decimals, m, decimals, s),
        (Some(m), None) => format!("{:.*}", decimals, m),
        _ => "-".to_string(),
    }
}

pub fn print_import_summary(reports: &[ImportReport]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Source").add_attribute(Attribute::Bold),
        Cell::new("Imported").fg(Color::Green),
        Cell::new("Duplicates").fg(Color::Yellow),
        Cell::new("Rows"),
        Cell::new("Path"),
    ]);
    right_align(&mut table, 1, 3);

    for r in reports {
        table.add_row(vec![
            Cell::new(&r.source).add_attribute(Attribute::Bold),
            Cell::new(r.imported).fg(Color::Green),
            Cell::new(r.duplicates_skipped).fg(Color::Yellow),
            Cell::new(r.total_rows_considered),
            Cell::new(&r.path),
        ]);
    }
    println!("\n{}", table);

    let imported: usize = reports.iter().map(|r| r.imported).sum();
    let dupes: usize = reports.iter().map(|r| r.duplicates_skipped).sum();
    println!("✅ Imported {} shots ({} duplicates skipped)", imported, dupes);
}

pub fn print_club_table(rows: &[ClubRow]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Club").add_attribute(Attribute::Bold),
        Cell::new("N"),
        Cell::new("Carry").fg(Color::Cyan),
        Cell::new("P10"),
        Cell::new("Med"),
        Cell::new("P90"),
        Cell::new("Total"),
        Cell::new("Club Spd"),
        Cell::new("Ball Spd"),
        Cell::new("Smash").fg(Color::Green),
        Cell::new("Launch"),
        Cell::new("Spin"),
        Cell::new("F2P"),
    ]);
    right_align(&mut table, 1, 12);

    for r in rows {
        table.add_row(vec![
            Cell::new(&r.club).add_attribute(Attribute::Bold),
            Cell::new(r.count),
            Cell::new(mean_sd(r.avg_carry, r.sd_carry, 1)).fg(Color::Cyan),
            Cell::new(opt(r.carry_p10, 1)),
            Cell::new(opt(r.carry_median, 1)),
            Cell::new(opt(r.carry_p90, 1)),
            Cell::new(mean_sd(r.avg_total, r.sd_total, 1)),
            Cell::new(opt(r.avg_club_speed, 1)),
            Cell::new(opt(r.avg_ball_speed, 1)),
            Cell::new(mean_sd(r.avg_smash, r.sd_smash, 2)).fg(Color::Green),
            Cell::new(opt(r.avg_launch_angle, 1)),
            Cell::new(mean_sd(r.avg_spin, r.sd_spin, 0)),
            Cell::new(opt(r.avg_face_to_path, 1)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_gapping_table(gaps: &[Gap]) {
    if gaps.is_empty() {
        println!("\n(Gapping needs at least two clubs with carry data.)");
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Longer").add_attribute(Attribute::Bold),
        Cell::new("Shorter").add_attribute(Attribute::Bold),
        Cell::new("Carry"),
        Cell::new("Carry"),
        Cell::new("Gap").fg(Color::Cyan),
        Cell::new("Flag"),
    ]);
    right_align(&mut table, 2, 4);

    for g in gaps {
        let flag_color = match g.flag {
            GapFlag::Tight => Color::Red,
            GapFlag::Wide => Color::Yellow,
            GapFlag::Ok => Color::Green,
        };
        table.add_row(vec![
            Cell::new(&g.longer),
            Cell::new(&g.shorter),
            Cell::new(format!("{:.1}", g.longer_carry)),
            Cell::new(format!("{:.1}", g.shorter_carry)),
            Cell::new(format!("{:.1}", g.gap)).fg(Color::Cyan),
            Cell::new(g.flag.to_string()).fg(flag_color),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_shape_breakdown(shape: &ShapeBreakdown) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Shape").add_attribute(Attribute::Bold),
        Cell::new("Shots"),
        Cell::new("%"),
    ]);
    right_align(&mut table, 1, 2);

    for s in ShotShape::iter() {
        table.add_row(vec![
            Cell::new(s.to_string()),
            Cell::new(shape.count(s)),
            Cell::new(format!("{:.1}", shape.percent(s))),
        ]);
    }
    if shape.unclassified > 0 {
        table.add_row(vec![
            Cell::new("(no direction)").fg(Color::DarkGrey),
            Cell::new(shape.unclassified),
            Cell::new(""),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_dispersion_table(rows: &[DispersionSummary]) {
    if rows.is_empty() {
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Club").add_attribute(Attribute::Bold),
        Cell::new("Pts"),
        Cell::new("Carry"),
        Cell::new("Carry SD"),
        Cell::new("Lateral"),
        Cell::new("Lateral SD").fg(Color::Cyan),
    ]);
    right_align(&mut table, 1, 5);

    for d in rows {
        table.add_row(vec![
            Cell::new(&d.club).add_attribute(Attribute::Bold),
            Cell::new(d.points),
            Cell::new(format!("{:.1}", d.mean_carry)),
            Cell::new(format!("{:.1}", d.sd_carry)),
            Cell::new(format!("{:+.1}", d.mean_lateral)),
            Cell::new(format!("{:.1}", d.sd_lateral)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_sessions_table(sessions: &[SessionSummary]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Session").add_attribute(Attribute::Bold),
        Cell::new("Shots"),
        Cell::new("First"),
        Cell::new("Last"),
        Cell::new("Clubs"),
    ]);
    right_align(&mut table, 1, 1);

    let fmt_time = |t: Option<chrono::DateTime<chrono::Utc>>| {
        t.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    for s in sessions {
        table.add_row(vec![
            Cell::new(&s.session_id).add_attribute(Attribute::Bold),
            Cell::new(s.shots),
            Cell::new(fmt_time(s.first)),
            Cell::new(fmt_time(s.last)),
            Cell::new(s.clubs.join(", ")),
        ]);
    }
    println!("\n{}", table);
}
