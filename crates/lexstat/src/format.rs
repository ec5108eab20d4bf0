use std::fmt::Write as _;

use anyhow::Result;
use lexstat_types::{
    ContentSummary, DirectorySummary, FileSummary, RunReceipt, RunStatus, Tally, WordReport,
};
use serde::Serialize;

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn render_receipt_md(receipt: &RunReceipt) -> String {
    let mut s = String::new();
    let status = match receipt.status {
        RunStatus::Computed => "computed",
        RunStatus::Unchanged => "unchanged (nothing has changed in the structure)",
    };
    let _ = writeln!(s, "## lexstat scan: `{}`\n", receipt.root);
    let _ = writeln!(s, "- status: {status}");
    let _ = writeln!(s, "- extensions: {}", receipt.extensions.join(", "));
    let _ = writeln!(
        s,
        "- files: {}, directories: {}",
        receipt.files, receipt.directories
    );
    let _ = writeln!(s, "- fingerprint: `{}`\n", receipt.fingerprint);
    match &receipt.summary {
        Some(summary) => s.push_str(&render_directory_md(summary)),
        None => s.push_str("_No stored summary for the root._\n"),
    }
    s
}

pub(crate) fn render_directory_md(summary: &DirectorySummary) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "### Directory `{}`\n", summary.path);
    s.push_str("|Field|Value|\n");
    s.push_str("|---|---|\n");
    let _ = writeln!(s, "|Files|{}|", summary.file_count);
    let _ = writeln!(s, "|Subdirectories|{}|", summary.dirs.len());
    push_content_rows(&mut s, &summary.content);
    s
}

pub(crate) fn render_file_md(summary: &FileSummary) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "### File `{}`\n", summary.path);
    s.push_str("|Field|Value|\n");
    s.push_str("|---|---|\n");
    push_content_rows(&mut s, &summary.content);
    s
}

fn push_content_rows(s: &mut String, content: &ContentSummary) {
    let _ = writeln!(s, "|Words|{}|", content.word_count);
    let _ = writeln!(s, "|Avg word length|{:.2}|", content.average_word_length);
    let _ = writeln!(s, "|Most frequent|{}|", content.most_frequent_words.join(", "));
    let _ = writeln!(s, "|Least frequent|{}|", content.least_frequent_words.join(", "));
    let _ = writeln!(s, "|Vowels|{}|", tally_cell(&content.vowels));
    let _ = writeln!(s, "|Consonants|{}|", tally_cell(&content.consonants));
    let _ = writeln!(s, "|Syllables|{}|", content.syllables.total());
}

pub(crate) fn render_word_md(report: &WordReport) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "### Word `{}`\n", report.word);
    s.push_str("|Field|Value|\n");
    s.push_str("|---|---|\n");
    let _ = writeln!(s, "|Language|{}|", report.language);
    let _ = writeln!(s, "|Letters|{}|", report.number_of_letters);
    let _ = writeln!(s, "|Vowels|{}|", tally_cell(&report.vowels));
    let _ = writeln!(s, "|Consonants|{}|", tally_cell(&report.consonants));
    let syllables: Vec<&str> = report.syllables.iter().map(|(k, _)| k).collect();
    let _ = writeln!(
        s,
        "|Syllables|{} ({})|",
        report.syllables.total(),
        syllables.join(", ")
    );
    s
}

pub(crate) fn render_files_md(files: &[&FileSummary]) -> String {
    let mut s = String::new();
    s.push_str("|Path|Words|Avg|Most frequent|\n");
    s.push_str("|---|---:|---:|---|\n");
    for f in files {
        let _ = writeln!(
            s,
            "|{}|{}|{:.2}|{}|",
            f.path,
            f.content.word_count,
            f.content.average_word_length,
            f.content.most_frequent_words.join(", ")
        );
    }
    let _ = writeln!(s, "|**Total**|{}|||", files.len());
    s
}

pub(crate) fn render_dirs_md(dirs: &[&DirectorySummary]) -> String {
    let mut s = String::new();
    s.push_str("|Path|Files|Words|Avg|\n");
    s.push_str("|---|---:|---:|---:|\n");
    for d in dirs {
        let _ = writeln!(
            s,
            "|{}|{}|{}|{:.2}|",
            d.path, d.file_count, d.content.word_count, d.content.average_word_length
        );
    }
    s
}

pub(crate) fn render_extensions_md(extensions: &[&str], defaults: &[&str]) -> String {
    let mut s = String::new();
    s.push_str("|Extension|Default|\n");
    s.push_str("|---|---|\n");
    for ext in extensions {
        let default = if defaults.contains(ext) { "yes" } else { "" };
        let _ = writeln!(s, "|{ext}|{default}|");
    }
    s
}

/// `a:2 e:1`, in key order.
fn tally_cell(tally: &Tally) -> String {
    tally
        .iter()
        .map(|(k, v)| format!("{k}:{v}"))
        .collect::<Vec<_>>()
        .join(" ")
}
