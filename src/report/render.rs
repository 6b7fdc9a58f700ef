// Renderings of a report: JSON summary, plain text and a standalone HTML page.

use std::collections::BTreeMap;

use serde_json::json;
use serde_json::Map as JSMap;

use crate::report::*;

const INTRO: &str = "This report tracks how prominent the discussion of terms related to Artificial Intelligence (AI) \
is in Dutch party programs, and how it evolved between two elections.";

const SALIENCE_HEADING: &str = "Salience of AI across parties";
const SALIENCE_NOTE: &str = "The rate is the number of AI-related sentences per 10,000 words of the program. \
A decreasing rate means less discussion of AI, an increasing rate means more discussion of AI.";

const DIMENSIONS_HEADING: &str =
    "Ways AI is discussed: Policy, Ethics, Security, Economy, Labour and Social Context";

const EXAMPLES_HEADING: &str = "Example of statements";
const NO_EXAMPLES: &str = "No examples found for this combination.";

const CHANGE_NOTE: &str = "Positive Δ: the party discusses AI more often in the later program. \
Negative Δ: the party discusses AI less often. Rates are normalized by the length of the programs.";

const INTERPRETATION_NOTE: &str = "Governments showing negative Δ (decrease) illustrate institutionalization \
or issue saturation, meaning AI has become part of routine governance. In contrast, increases among \
opposition parties suggest renewed politicization or the strategic use of AI in framing new policy debates.";

fn caption(report: &Report) -> String {
    format!(
        "VR · Data: Party programs {}–{}",
        report.change_table.year_a, report.change_table.year_b
    )
}

fn change_heading(report: &Report) -> String {
    format!(
        "Change overview ({} → {})",
        report.change_table.year_a, report.change_table.year_b
    )
}

pub fn format_rate(rate: f64) -> String {
    format!("{:.2}", rate)
}

pub fn format_delta(delta: f64) -> String {
    format!("{:+.2}", delta)
}

fn format_opt_rate(rate: Option<f64>) -> String {
    rate.map(format_rate).unwrap_or_else(|| "n/a".to_string())
}

fn warning_message(table: &ChangeTable) -> Option<String> {
    match &table.warning {
        Some(ChangeWarning::MissingYear { years }) => {
            let ys: Vec<String> = years.iter().map(|y| y.to_string()).collect();
            Some(format!(
                "Missing data for {} ({} or {}): Δ could not be computed.",
                ys.join(", "),
                table.year_a,
                table.year_b
            ))
        }
        None => None,
    }
}

/// The aggregates grouped by status then party, in the order of the facets of the line chart.
fn salience_facets(report: &Report) -> Vec<(Status, BTreeMap<&str, Vec<&AggregateRow>>)> {
    let mut res: Vec<(Status, BTreeMap<&str, Vec<&AggregateRow>>)> = Vec::new();
    for status in [Status::Governing, Status::Opposition] {
        let mut parties: BTreeMap<&str, Vec<&AggregateRow>> = BTreeMap::new();
        for row in report.aggregates.iter().filter(|r| r.status == status) {
            parties.entry(row.party.as_str()).or_default().push(row);
        }
        if !parties.is_empty() {
            res.push((status, parties));
        }
    }
    res
}

fn undefined_reason(row: &AggregateRow) -> Option<&'static str> {
    row.undefined_rate().map(|u| match u {
        UndefinedRate::MissingWordCount => "missing word count",
        UndefinedRate::ZeroWordCount => "zero word count",
    })
}

// ********** JSON **********

pub fn summary_json(report: &Report) -> JSValue {
    let mut sources: JSMap<String, JSValue> = JSMap::new();
    for (name, file) in report.sources.iter() {
        sources.insert(name.clone(), json!(file));
    }

    let salience: Vec<JSValue> = salience_facets(report)
        .into_iter()
        .map(|(status, parties)| {
            let ps: Vec<JSValue> = parties
                .into_iter()
                .map(|(party, rows)| {
                    let points: Vec<JSValue> = rows
                        .iter()
                        .map(|r| {
                            json!({
                                "year": r.year,
                                "aiSentences": r.ai_sentences,
                                "totalWords": r.total_words,
                                "rate": r.rate,
                                "undefinedRate": undefined_reason(r),
                            })
                        })
                        .collect();
                    json!({"party": party, "points": points})
                })
                .collect();
            json!({"status": report.status_labels.label(status), "parties": ps})
        })
        .collect();

    let dimensions: Vec<JSValue> = report
        .dimension_counts
        .iter()
        .map(|c| {
            json!({
                "party": c.party,
                "year": c.year,
                "dimension": c.dimension,
                "count": c.count,
            })
        })
        .collect();

    let examples: JSValue = match &report.selection {
        Some(sel) => {
            let results: Vec<JSValue> = report
                .examples
                .iter()
                .map(|s| {
                    json!({
                        "dimension": s.dimension,
                        "sentiment": s.sentiment,
                        "sentence": s.sentence,
                    })
                })
                .collect();
            json!({
                "party": sel.party,
                "year": sel.year,
                "dimension": sel.dimension,
                "limit": report.examples_limit,
                "results": results,
            })
        }
        None => JSValue::Null,
    };

    let table = &report.change_table;
    let change_rows: Vec<JSValue> = table
        .rows
        .iter()
        .map(|r| {
            json!({
                "party": r.party,
                "rateA": format_rate(r.rate_a),
                "rateB": format_rate(r.rate_b),
                "delta": format_delta(r.delta),
            })
        })
        .collect();
    let dimension_source = match report.dimension_source {
        DimensionSource::Summary => "summary",
        DimensionSource::Sentences => "sentences",
    };
    let undefined: Vec<JSValue> = table
        .undefined_rates
        .iter()
        .map(|(party, year)| json!({"party": party, "year": year}))
        .collect();

    json!({
        "config": {
            "title": report.title,
            "sources": sources,
            "governingParties": report.governing,
            "years": [table.year_a, table.year_b],
            "dimensions": report.dimensions,
        },
        "salience": salience,
        "dimensions": {
            "source": dimension_source,
            "counts": dimensions,
        },
        "options": {
            "parties": report.options.parties,
            "years": report.options.years,
            "dimensions": report.options.dimensions,
        },
        "examples": examples,
        "change": {
            "yearA": table.year_a,
            "yearB": table.year_b,
            "warning": warning_message(table),
            "rows": change_rows,
            "undefinedRates": undefined,
        },
    })
}

// ********** Text **********

fn dimension_table(report: &Report) -> BTreeMap<(&str, Year), Vec<(&str, u64)>> {
    let mut res: BTreeMap<(&str, Year), Vec<(&str, u64)>> = BTreeMap::new();
    for c in report.dimension_counts.iter() {
        res.entry((c.party.as_str(), c.year))
            .or_default()
            .push((c.dimension.as_str(), c.count));
    }
    res
}

pub fn render_text(report: &Report) -> String {
    let mut s = String::new();
    s.push_str(&format!("{}\n{}\n\n", report.title, "=".repeat(report.title.chars().count())));

    s.push_str(&format!("## {}\n\n", SALIENCE_HEADING));
    for (status, parties) in salience_facets(report) {
        s.push_str(&format!("[{}]\n", report.status_labels.label(status)));
        for (party, rows) in parties {
            let points: Vec<String> = rows
                .iter()
                .map(|r| format!("{}: {:>6}", r.year, format_opt_rate(r.rate)))
                .collect();
            s.push_str(&format!("  {:<12} {}\n", party, points.join("   ")));
        }
    }
    s.push_str(&format!("\n{}\n\n", SALIENCE_NOTE));

    s.push_str(&format!("## {}\n\n", DIMENSIONS_HEADING));
    for ((party, year), counts) in dimension_table(report) {
        let cs: Vec<String> = counts
            .iter()
            .filter(|(_, c)| *c > 0)
            .map(|(d, c)| format!("{}={}", d, c))
            .collect();
        s.push_str(&format!("  {:<12} {}  {}\n", party, year, cs.join(" ")));
    }
    s.push('\n');

    s.push_str(&format!("## {}\n\n", EXAMPLES_HEADING));
    if let Some(sel) = &report.selection {
        s.push_str(&format!(
            "Party: {}  Year: {}  Dimension: {}\n\n",
            sel.party, sel.year, sel.dimension
        ));
    }
    if report.examples.is_empty() {
        s.push_str(&format!("{}\n", NO_EXAMPLES));
    }
    for ex in report.examples.iter() {
        s.push_str(&format!(
            "  Dimension: {}  Sentiment: {}\n  > {}\n\n",
            ex.dimension, ex.sentiment, ex.sentence
        ));
    }
    s.push('\n');

    let table = &report.change_table;
    s.push_str(&format!("## {}\n\n", change_heading(report)));
    if let Some(msg) = warning_message(table) {
        s.push_str(&format!("WARNING: {}\n\n", msg));
    }
    s.push_str(&format!(
        "  {:<12} {:>8} {:>8} {:>8}\n",
        "Party", table.year_a, table.year_b, "Δ"
    ));
    for r in table.rows.iter() {
        s.push_str(&format!(
            "  {:<12} {:>8} {:>8} {:>8}\n",
            r.party,
            format_rate(r.rate_a),
            format_rate(r.rate_b),
            format_delta(r.delta)
        ));
    }
    for (party, year) in table.undefined_rates.iter() {
        s.push_str(&format!(
            "  * no rate for {} in {}, counted as zero\n",
            party, year
        ));
    }
    s.push_str(&format!(
        "\n{}\n\n{}\n\n---\n{}\n",
        CHANGE_NOTE,
        INTERPRETATION_NOTE,
        caption(report)
    ));
    s
}

// ********** HTML **********

pub fn escape_html(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => res.push_str("&amp;"),
            '<' => res.push_str("&lt;"),
            '>' => res.push_str("&gt;"),
            '"' => res.push_str("&quot;"),
            '\'' => res.push_str("&#39;"),
            _ => res.push(c),
        }
    }
    res
}

fn html_table(header: &[String], rows: &[Vec<String>]) -> String {
    let mut s = String::from("<table>\n<thead><tr>");
    for h in header.iter() {
        s.push_str(&format!("<th>{}</th>", escape_html(h)));
    }
    s.push_str("</tr></thead>\n<tbody>\n");
    for row in rows.iter() {
        s.push_str("<tr>");
        for cell in row.iter() {
            s.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        s.push_str("</tr>\n");
    }
    s.push_str("</tbody>\n</table>\n");
    s
}

pub fn render_html(report: &Report) -> String {
    let table = &report.change_table;
    let years: Vec<Year> = report.options.years.clone();

    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", escape_html(&report.title)));
    body.push_str(&format!("<p>{}</p>\n", escape_html(INTRO)));

    // Line chart data: one table per facet, one column per year.
    body.push_str(&format!("<h2>{}</h2>\n", escape_html(SALIENCE_HEADING)));
    for (status, parties) in salience_facets(report) {
        body.push_str(&format!(
            "<h3>{}</h3>\n",
            escape_html(report.status_labels.label(status))
        ));
        let mut header = vec!["Party".to_string()];
        header.extend(years.iter().map(|y| y.to_string()));
        let rows: Vec<Vec<String>> = parties
            .iter()
            .map(|(party, rows)| {
                let mut r = vec![party.to_string()];
                for y in years.iter() {
                    let cell = match rows.iter().find(|a| a.year == *y) {
                        Some(a) => format_opt_rate(a.rate),
                        None => "".to_string(),
                    };
                    r.push(cell);
                }
                r
            })
            .collect();
        body.push_str(&html_table(&header, &rows));
    }
    body.push_str(&format!("<p class=\"note\">{}</p>\n", escape_html(SALIENCE_NOTE)));

    // Stacked bar data: one row per party and year, one column per dimension.
    body.push_str(&format!("<h2>{}</h2>\n", escape_html(DIMENSIONS_HEADING)));
    let dim_table = dimension_table(report);
    let mut dim_names: Vec<&str> = report.dimensions.iter().map(|d| d.as_str()).collect();
    for counts in dim_table.values() {
        for (d, _) in counts.iter() {
            if !dim_names.contains(d) {
                dim_names.push(*d);
            }
        }
    }
    let mut header = vec!["Party".to_string(), "Year".to_string()];
    header.extend(dim_names.iter().map(|d| d.to_string()));
    let rows: Vec<Vec<String>> = dim_table
        .iter()
        .map(|((party, year), counts)| {
            let mut r = vec![party.to_string(), year.to_string()];
            for d in dim_names.iter() {
                let c = counts
                    .iter()
                    .find(|(name, _)| name == d)
                    .map(|(_, c)| *c)
                    .unwrap_or(0);
                r.push(c.to_string());
            }
            r
        })
        .collect();
    body.push_str(&html_table(&header, &rows));

    // Example browser.
    body.push_str(&format!("<h2>{}</h2>\n", escape_html(EXAMPLES_HEADING)));
    if let Some(sel) = &report.selection {
        body.push_str(&format!(
            "<p><b>Party:</b> {} <b>Year:</b> {} <b>Dimension:</b> {}</p>\n",
            escape_html(&sel.party),
            sel.year,
            escape_html(&sel.dimension)
        ));
    }
    if report.examples.is_empty() {
        body.push_str(&format!("<p class=\"info\">{}</p>\n", escape_html(NO_EXAMPLES)));
    }
    for ex in report.examples.iter() {
        body.push_str(&format!(
            "<div class=\"example\">\n<b>Dimension:</b> {}<br>\n<b>Sentiment:</b> {}\n<blockquote>{}</blockquote>\n</div>\n",
            escape_html(&ex.dimension),
            escape_html(&ex.sentiment),
            escape_html(&ex.sentence)
        ));
    }

    // Change table.
    body.push_str(&format!("<h2>{}</h2>\n", escape_html(&change_heading(report))));
    if let Some(msg) = warning_message(table) {
        body.push_str(&format!("<p class=\"warning\">{}</p>\n", escape_html(&msg)));
    }
    let header = vec![
        "Party".to_string(),
        table.year_a.to_string(),
        table.year_b.to_string(),
        "Δ".to_string(),
    ];
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|r| {
            vec![
                r.party.clone(),
                format_rate(r.rate_a),
                format_rate(r.rate_b),
                format_delta(r.delta),
            ]
        })
        .collect();
    body.push_str(&html_table(&header, &rows));
    body.push_str(&format!("<p class=\"note\">{}</p>\n", escape_html(CHANGE_NOTE)));
    body.push_str(&format!(
        "<p class=\"note\">{}</p>\n",
        escape_html(INTERPRETATION_NOTE)
    ));
    body.push_str(&format!(
        "<hr>\n<p class=\"caption\">{}</p>\n",
        escape_html(&caption(report))
    ));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(&report.title),
        STYLE,
        body
    )
}

const STYLE: &str = "body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; margin-bottom: 1em; }
th, td { border: 1px solid #ddd; padding: 4px 8px; text-align: right; }
th:first-child, td:first-child { text-align: left; }
.example { background-color: #f9f9f9; border-radius: 10px; padding: 10px; margin-bottom: 10px; }
.warning { color: #8a6d3b; background-color: #fcf8e3; padding: 8px; }
.note { font-size: 0.9em; color: #555; }
.caption { font-size: 0.8em; color: #888; }
";

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        let aggregates = vec![
            AggregateRow {
                party: "VVD".to_string(),
                year: 2023,
                ai_sentences: 2,
                total_words: Some(10000),
                rate: Some(2.0),
                status: Status::Governing,
            },
            AggregateRow {
                party: "VVD".to_string(),
                year: 2025,
                ai_sentences: 1,
                total_words: Some(20000),
                rate: Some(0.5),
                status: Status::Governing,
            },
            AggregateRow {
                party: "<Party>".to_string(),
                year: 2023,
                ai_sentences: 1,
                total_words: None,
                rate: None,
                status: Status::Opposition,
            },
        ];
        let change_table = compute_change_table(&aggregates, 2023, 2025);
        Report {
            title: "Test & report".to_string(),
            status_labels: StatusLabels::default(),
            governing: vec!["VVD".to_string()],
            sources: vec![("sentences".to_string(), "s.csv".to_string())],
            aggregates,
            change_table,
            dimensions: vec!["Ethical".to_string()],
            dimension_counts: vec![DimensionCount {
                party: "VVD".to_string(),
                year: 2023,
                dimension: "Ethical".to_string(),
                count: 2,
            }],
            dimension_source: DimensionSource::Sentences,
            options: SelectionOptions {
                parties: vec!["<Party>".to_string(), "VVD".to_string()],
                years: vec![2023, 2025],
                dimensions: vec!["Ethical".to_string()],
            },
            selection: Some(Selection {
                party: "VVD".to_string(),
                year: 2025,
                dimension: "Ethical".to_string(),
            }),
            examples_limit: 5,
            examples: vec![],
        }
    }

    #[test]
    fn formats() {
        assert_eq!(format_rate(2.0), "2.00");
        assert_eq!(format_rate(0.456), "0.46");
        assert_eq!(format_delta(-1.5), "-1.50");
        assert_eq!(format_delta(0.6), "+0.60");
        assert_eq!(format_delta(0.0), "+0.00");
    }

    #[test]
    fn json_summary() {
        let js = summary_json(&report());
        assert_eq!(js["salience"][0]["status"], "governing");
        assert_eq!(js["salience"][0]["parties"][0]["points"][1]["rate"], 0.5);
        assert_eq!(js["salience"][1]["parties"][0]["points"][0]["rate"], JSValue::Null);
        assert_eq!(
            js["salience"][1]["parties"][0]["points"][0]["undefinedRate"],
            "missing word count"
        );
        assert_eq!(js["change"]["rows"][0]["party"], "<Party>");
        assert_eq!(js["change"]["rows"][1]["delta"], "-1.50");
        assert_eq!(js["change"]["warning"], JSValue::Null);
        assert_eq!(js["examples"]["results"].as_array().unwrap().len(), 0);
        assert_eq!(js["config"]["sources"]["sentences"], "s.csv");
    }

    #[test]
    fn text_report() {
        let text = render_text(&report());
        assert!(text.contains(NO_EXAMPLES));
        assert!(text.contains("VVD"));
        assert!(text.contains("-1.50"));
        assert!(text.contains("no rate for <Party> in 2023"));
        assert!(text.contains("Ethical=2"));
    }

    #[test]
    fn html_is_escaped() {
        let html = render_html(&report());
        assert!(html.contains("<title>Test &amp; report</title>"));
        assert!(html.contains("<td>&lt;Party&gt;</td>"));
        assert!(!html.contains("<td><Party></td>"));
        assert!(html.contains("<td>+0.00</td>"));
        assert_eq!(escape_html("a\"b'c"), "a&quot;b&#39;c");
    }

    #[test]
    fn closing_notes_and_caption() {
        let html = render_html(&report());
        let note_pos = html.find("Governments showing negative Δ").unwrap();
        let caption_pos = html
            .find("<p class=\"caption\">VR · Data: Party programs 2023–2025</p>")
            .unwrap();
        assert!(html.find(CHANGE_NOTE).unwrap() < note_pos);
        assert!(note_pos < caption_pos);

        let text = render_text(&report());
        assert!(text.contains(INTERPRETATION_NOTE));
        assert!(text.trim_end().ends_with("VR · Data: Party programs 2023–2025"));
    }
}
