use {
  serde::{Deserialize, Serialize},
  std::fmt::Display,
  treasury_primitives::{ResolvedAllocation, SplitGroup},
};

/// Columns of an exported split table, in order.
pub const CSV_HEADER: [&str; 6] = [
  "beneficiary",
  "percent",
  "preferClaimed",
  "lockedUntil",
  "projectId",
  "allocator",
];

/// How fields are escaped when rows are joined into CSV text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quoting {
  /// Fields are written verbatim. A field containing a comma will
  /// shift the columns of its row.
  #[default]
  Never,

  /// Fields containing a delimiter, a quote or a line break are wrapped
  /// in double quotes and embedded quotes are doubled (RFC 4180).
  Rfc4180,
}

fn allocation_row(allocation: &ResolvedAllocation) -> Vec<String> {
  vec![
    allocation.beneficiary.to_string(),
    allocation.percent.as_fraction(),
    allocation.prefer_claimed.to_string(),
    allocation.locked_until.to_string(),
    allocation
      .project_id
      .map(|id| id.to_string())
      .unwrap_or_default(),
    allocation
      .allocator
      .as_ref()
      .map(|a| a.to_string())
      .unwrap_or_default(),
  ]
}

/// Lays out resolved allocations as a table of strings, header first,
/// one row per allocation in the given order.
///
/// Percents are exact fractions of the whole (`0.5` for half). Missing
/// project ids and allocators are left empty.
pub fn to_rows(allocations: &[ResolvedAllocation]) -> Vec<Vec<String>> {
  let header: Vec<_> = CSV_HEADER.iter().map(|h| h.to_string()).collect();
  std::iter::once(header)
    .chain(allocations.iter().map(allocation_row))
    .collect()
}

fn quote(field: &str, quoting: Quoting) -> String {
  let needs_quotes = |f: &str| f.contains([',', '"', '\r', '\n']);
  match quoting {
    Quoting::Rfc4180 if needs_quotes(field) => {
      format!("\"{}\"", field.replace('"', "\"\""))
    }
    _ => field.to_owned(),
  }
}

/// Joins rows produced by [`to_rows`] into comma-separated UTF-8 text,
/// one line per row, each line terminated with `\n`.
pub fn to_csv(rows: &[Vec<String>], quoting: Quoting) -> String {
  rows.iter().fold(String::new(), |mut out, row| {
    let line: Vec<_> = row.iter().map(|f| quote(f, quoting)).collect();
    out.push_str(&line.join(","));
    out.push('\n');
    out
  })
}

/// How a project is referred to in exported file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectRef {
  Handle(String),
  Id(u64),
}

impl Display for ProjectRef {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ProjectRef::Handle(handle) => write!(f, "@{handle}"),
      ProjectRef::Id(id) => write!(f, "project-{id}"),
    }
  }
}

/// Base name (no extension) of the file a split table is exported to,
/// for example `@banny_payouts_fc-4`.
pub fn export_filename(
  project: &ProjectRef,
  group: SplitGroup,
  funding_cycle: u64,
) -> String {
  format!("{project}_{group}_fc-{funding_cycle}")
}
