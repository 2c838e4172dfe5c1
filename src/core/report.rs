use crate::domain::model::UniversityRecord;
use crate::utils::error::Result;
use chrono::NaiveDate;
use serde::Serialize;

pub const JSON_FILENAME: &str = "universities.json";
pub const HTML_FILENAME: &str = "index.html";

pub const REPOSITORY_URL: &str = "https://github.com/Sbozzolo/has_rse";

const AWESOMPLETE_CSS: &str = "https://cdn.jsdelivr.net/npm/awesomplete@1.1.5/awesomplete.css";
const AWESOMPLETE_JS: &str = "https://cdn.jsdelivr.net/npm/awesomplete@1.1.5/awesomplete.min.js";

/// Serializes the dataset with a 4-space indent.
pub fn to_json(records: &[UniversityRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn from_json(data: &[u8]) -> Result<Vec<UniversityRecord>> {
    Ok(serde_json::from_slice(data)?)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_row(record: &UniversityRecord) -> String {
    let status = if record.has_rse { "✅" } else { "❌" };
    let link = if record.link.is_empty() {
        String::new()
    } else {
        format!(
            r#"<a href="{}" target="_blank">Link</a>"#,
            escape_html(&record.link)
        )
    };

    format!(
        r#"
        <tr>
           <td>{}</td>
           <td style="text-align: center;">{}</td>
           <td>{}</td>
        </tr>"#,
        escape_html(&record.name),
        status,
        link
    )
}

/// Renders the standalone report page. `date` is the "last checked" date shown in the header.
pub fn render_html(records: &[UniversityRecord], date: NaiveDate) -> String {
    let total = records.len();
    let with_rse = records.iter().filter(|r| r.has_rse).count();
    let rows: String = records.iter().map(render_row).collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>R1 Universities with RSE Groups</title>
  <meta charset="utf-8">
  <link rel="stylesheet" href="style.css">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <link rel="stylesheet" href="{css}" />
</head>
<body>
  <div class="container">
    <div class="centered-content">
      <h1>R1 Universities with RSE Groups</h1>
      <p>As of {date}, <strong>{with_rse} out of {total}</strong> R1 universities
         appear to have RSE groups based on search results. If you find errors, please, open an <a href="{repo}/issues">issue</a>. See code <a href="{repo}">here</a>.</p>

      <input type="text" id="searchInput" placeholder="Search universities..." class="awesomplete" list="universityList">
      <datalist id="universityList">
      </datalist>

      <table class="styled-table" id="universityTable">
        <thead>
          <tr>
            <th>University</th>
            <th>RSE Group</th>
            <th>Link</th>
          </tr>
        </thead>
        <tbody>{rows}
        </tbody>
      </table>

      <div class="info">
        <h2 onclick="toggleInfo()">How this list was generated: <span id="info-arrow">▼</span></h2>
        <div id="info-content" style="display: none;">
          <ol>
            <li>For each R1 university, a web search was performed using the university name
                and "research software engineering".</li>
            <li>The search results were filtered to include only those from .edu domains.</li>
            <li>If a search result contained keywords related to RSE groups (e.g., "research
                software engineer", "RSE team"), the university was marked as having an RSE group.</li>
            <li>The "Link" column provides a link to the first search result that indicated
                the presence of an RSE group (if found).</li>
          </ol>
          <p><strong>Note:</strong> This is an automated process and the results might not be perfectly accurate.
             It is recommended to verify the information by visiting the university's website.</p>
        </div>
      </div>
    </div>
  </div>

  <script src="{js}"></script>
  <script>
    const searchInput = document.getElementById('searchInput');
    const table = document.getElementById('universityTable');
    const rows = table.querySelectorAll('tbody tr');
    const universityNames = [];

    rows.forEach(row => {{
      universityNames.push(row.cells[0].textContent);
    }});

    searchInput.addEventListener('keyup', () => {{
      const filter = searchInput.value.toLowerCase();
      rows.forEach(row => {{
        const universityName = row.cells[0].textContent.toLowerCase();
        row.style.display = universityName.includes(filter) ? '' : 'none';
      }});
    }});

    new Awesomplete(searchInput, {{
      list: universityNames,
      minChars: 1,
      autoSelect: true
    }});

    function toggleInfo() {{
      var infoContent = document.getElementById("info-content");
      var arrow = document.getElementById("info-arrow");
      if (infoContent.style.display === "none") {{
        infoContent.style.display = "block";
        arrow.textContent = "▲";
      }} else {{
        infoContent.style.display = "none";
        arrow.textContent = "▼";
      }}
    }}
  </script>
</body>
</html>
"#,
        repo = REPOSITORY_URL,
        css = AWESOMPLETE_CSS,
        js = AWESOMPLETE_JS,
        date = date.format("%Y-%m-%d"),
        with_rse = with_rse,
        total = total,
        rows = rows,
    )
}
