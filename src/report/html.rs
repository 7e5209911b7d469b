//! Static HTML rendering of the comparison table.

use std::fmt::Write;

use crate::models::LinterReport;

/// Render the report document. Pure: same inputs, same bytes. Rows keep
/// the order of `results`; linters with no repository metadata get empty
/// maintainer/URL cells.
pub fn render(timestamp: &str, results: &[LinterReport]) -> String {
    let mut doc = String::with_capacity(16 * 1024);

    doc.push_str(HEADER);

    for r in results {
        let mut row = String::new();
        write!(row, "\t\t\t\t<tr>\n\t\t\t\t\t<td>{}</td>\n", escape(&r.name)).unwrap();

        match &r.repo {
            Some(repo) => {
                let url = escape(&repo.url);
                write!(row, "\t\t\t\t\t<td>{}</td>\n", escape(&repo.maintainer)).unwrap();
                write!(row, "\t\t\t\t\t<td><a href=\"{url}\">{url}</a></td>\n").unwrap();
            }
            None => {
                row.push_str("\t\t\t\t\t<td></td>\n\t\t\t\t\t<td></td>\n");
            }
        }

        for flag in [
            r.go_parser,
            r.go_loader,
            r.go_ssa,
            r.gometalinter,
            r.metalint,
            r.checker,
            r.flag,
            r.go_arg,
            r.go_flags,
            r.kingpin,
            r.pflag,
            r.sflags,
        ] {
            row.push_str(if flag {
                "\t\t\t\t\t<td class=\"t\">Y</td>\n"
            } else {
                "\t\t\t\t\t<td class=\"f\">N</td>\n"
            });
        }

        write!(row, "\t\t\t\t\t<td class=\"notes\">{}</td>\n", escape(&r.notes)).unwrap();
        row.push_str("\t\t\t\t</tr>\n");
        doc.push_str(&row);
    }

    doc.push_str("\t\t\t</tbody>\n\t\t</table>\n");
    write!(
        doc,
        "\t\t<p class=\"timestamp\">{}</p>\n\t</body>\n</html>\n",
        escape(timestamp)
    )
    .unwrap();

    doc
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

const HEADER: &str = r#"<!DOCTYPE html>
<html>
	<head>
		<meta http-equiv="Content-Type" content="text/html; charset=utf-8">
		<style>
			html, body {
				font-family: Arial, sans-serif;
			}
			tt {
				font-family: Menlo, monospace;
			}
			table, th, td {
				border: 1px solid #000;
				border-collapse: collapse;
			}
			th, td {
				padding: .33em;
			}
			td.t, td.f {
				text-align: center;
			}
			td.t {
				background-color: #5bd64a;
			}
			td.f {
				background-color: #d64a4a;
			}
			td.notes, .timestamp {
				font-size: small;
			}
		</style>
	</head>
	<body>
		<table>
			<thead>
				<tr>
					<th colspan="3">General info</th>
					<th colspan="3">Input</th>
					<th colspan="3">Metalinter support</th>
					<th colspan="6">Options</th>
					<th rowspan="2">Notes</th>
				</tr>
				<tr>
					<th>Name</th>
					<th>Maintainer</th>
					<th>Repository URL</th>
					<th><tt>go/parser</tt></th>
					<th><tt>go/loader</tt></th>
					<th><tt>go/ssa</tt></th>
					<th><tt>gometalinter</tt></th>
					<th><tt>metalint</tt></th>
					<th><tt>Checker</tt></th>
					<th><tt>flag</tt></th>
					<th><tt>go-arg</tt></th>
					<th><tt>go-flags</tt></th>
					<th><tt>kingpin</tt></th>
					<th><tt>pflag</tt></th>
					<th><tt>sflags</tt></th>
				</tr>
			</thead>
			<tbody>
"#;
