use cipherbreak::optimizer::runner::Candidate;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

const PREVIEW_LEN: usize = 60;

fn preview(text: &str) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= PREVIEW_LEN {
        flat
    } else {
        let cut: String = flat.chars().take(PREVIEW_LEN).collect();
        format!("{}...", cut)
    }
}

pub fn print_candidates(title: &str, results: &[Candidate]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Key"),
        Cell::new("Plaintext"),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (rank, c) in results.iter().enumerate() {
        let rank_cell = if rank == 0 {
            Cell::new(format!("#{}", rank + 1))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(format!("#{}", rank + 1))
        };
        table.add_row(vec![
            rank_cell,
            Cell::new(c.score).fg(Color::Cyan),
            Cell::new(&c.key),
            Cell::new(preview(&c.plaintext)),
        ]);
    }
    println!("\n{}", table);
}
