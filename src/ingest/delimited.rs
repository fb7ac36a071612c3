// Minimal delimited-text reader for keyword exports.
//
// Handles what keyword-research tools actually emit: quoted fields with
// doubled quotes, delimiters and newlines inside quotes, CRLF or LF line
// endings and a leading UTF-8 BOM. Blank lines are skipped.

/// Split `text` into rows of fields.
pub fn parse_delimited(text: &str, delimiter: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut has_content = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' => {
                in_quotes = true;
                has_content = true;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                finish_row(&mut rows, &mut row, &mut field, has_content);
                has_content = false;
            }
            c if c == delimiter => {
                row.push(std::mem::take(&mut field));
                has_content = true;
            }
            c => {
                field.push(c);
                has_content = true;
            }
        }
    }

    finish_row(&mut rows, &mut row, &mut field, has_content);
    rows
}

fn finish_row(
    rows: &mut Vec<Vec<String>>,
    row: &mut Vec<String>,
    field: &mut String,
    has_content: bool,
) {
    if has_content {
        row.push(std::mem::take(field));
        rows.push(std::mem::take(row));
    } else {
        row.clear();
        field.clear();
    }
}
