// src/cli.rs
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use crate::config::options::{AppOptions, EmptySelection, ExportFormat};
use crate::data::Catalogue;
use crate::error::Error;
use crate::filter::{CATEGORICAL, FilterCriteria, FilterDomains};
use crate::present;
use crate::schema::Field;
use crate::{file, store};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    List,
    Details,
    Count,
    Domains,
    Export,
}

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub options: AppOptions,
    /// Values given per categorical flag, in command-line order
    pub picks: BTreeMap<Field, Vec<String>>,
    pub mw_min: Option<f64>,
    pub mw_max: Option<f64>,
    pub name: Option<String>,
    pub output: Output,
    pub help: bool,
}

impl Params {
    pub fn picks(&self, field: Field) -> &[String] {
        self.picks.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Criteria for these params over a catalogue with `domains`.
    /// Multiselects not given on the command line keep their initial value
    /// under the configured empty-selection policy. A one-sided weight range
    /// is open on the other side.
    pub fn criteria(&self, domains: &FilterDomains) -> FilterCriteria {
        let policy = self.options.filter.empty_selection;
        let mut c = FilterCriteria::initial(domains, policy);

        for field in CATEGORICAL {
            let picks = self.picks(field);
            if picks.is_empty() { continue; }
            if let Some(sel) = c.selection_mut(field) {
                *sel = picks.iter().cloned().collect();
            }
            c.blanks.remove(&field);
        }

        if self.mw_min.is_some() || self.mw_max.is_some() {
            c.molecular_weight_range = Some((
                self.mw_min.unwrap_or(f64::NEG_INFINITY),
                self.mw_max.unwrap_or(f64::INFINITY),
            ));
        }

        if let Some(q) = &self.name {
            c.set_name_query(q);
        }
        c
    }
}

pub fn parse_args<I>(args: I) -> Result<Params, Error>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, Error> {
        args.next().ok_or_else(|| Error::Usage(format!("Missing value for {flag}")))
    }
    fn pick(params: &mut Params, field: Field, v: String) {
        params.picks.entry(field).or_default().push(v);
    }
    fn number(v: &str, flag: &str) -> Result<f64, Error> {
        v.trim().parse().map_err(|_| Error::Usage(format!("Not a number for {flag}: {v}")))
    }

    while let Some(a) = args.next() {
        match a.as_str() {
            "--data" => params.options.data.path = PathBuf::from(value(&mut args, &a)?),
            "--partner" => pick(&mut params, Field::Partner, value(&mut args, &a)?),
            "--architecture" => pick(&mut params, Field::Architecture, value(&mut args, &a)?),
            "--reactivity" => pick(&mut params, Field::Reactivity, value(&mut args, &a)?),
            "--application" => pick(&mut params, Field::Application, value(&mut args, &a)?),
            "--mw-min" => params.mw_min = Some(number(&value(&mut args, &a)?, &a)?),
            "--mw-max" => params.mw_max = Some(number(&value(&mut args, &a)?, &a)?),
            "--name" => params.name = Some(value(&mut args, &a)?),
            "--empty-selects-none" => {
                params.options.filter.empty_selection = EmptySelection::MatchNothing
            }
            "--domains" => params.output = Output::Domains,
            "--count" => params.output = Output::Count,
            "--details" => params.output = Output::Details,
            "--export" => {
                let path = value(&mut args, &a)?;
                params.options.export.set_path(&path);
                params.output = Output::Export;
            }
            "--format" => {
                let v = value(&mut args, &a)?;
                params.options.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| Error::Usage(format!("Unknown format: {v}")))?;
            }
            "--include-headers" => params.options.export.include_headers = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(Error::Usage(format!("Unknown arg: {a}"))),
        }
    }

    Ok(params)
}

pub fn help_text() -> &'static str {
    include_str!("cli_help.txt")
}

/// Load, filter and print according to `params`.
pub fn run<W: Write>(params: &Params, out: &mut W) -> Result<(), Error> {
    if params.help {
        write_out(out, help_text())?;
        return Ok(());
    }

    let table = store::load_table(&params.options.data.path)?;
    let mut cat = Catalogue::new(table)?;

    if params.output == Output::Domains {
        return print_domains(cat.domains(), out);
    }

    let criteria = params.criteria(cat.domains());
    cat.refilter(criteria)?;

    match params.output {
        Output::Count => write_out(out, &format!("{}\n", cat.count())),
        Output::Export => {
            let path = file::export_table(&params.options.export, &cat.filtered())?;
            write_out(out, &format!("Wrote {} products to {}\n", cat.count(), path.display()))
        }
        Output::Details => print_list(&cat, true, out),
        _ => print_list(&cat, false, out),
    }
}

fn print_list<W: Write>(cat: &Catalogue, details: bool, out: &mut W) -> Result<(), Error> {
    let mut text = format!("### {}\n", present::count_heading(cat.count()));
    if cat.is_empty() {
        text.push_str(present::NO_MATCHES);
        text.push('\n');
    }
    for rec in cat.rows() {
        text.push_str(&present::link_line(rec));
        text.push('\n');
        if details {
            for (label, v) in present::detail_fields(rec) {
                text.push_str(&format!("    {label}: {v}\n"));
            }
        }
    }
    write_out(out, &text)
}

fn print_domains<W: Write>(d: &FilterDomains, out: &mut W) -> Result<(), Error> {
    let mut text = s!();
    for field in CATEGORICAL {
        let Some(values) = d.values(field) else { continue };
        if values.is_empty() { continue; }
        text.push_str(&format!("{}:\n", field.label()));
        for v in values {
            text.push_str(&format!("  {v}\n"));
        }
    }
    match d.molecular_weight {
        Some((lo, hi)) => text.push_str(&format!("{}: {lo}..={hi}\n", Field::MolecularWeight.label())),
        None => text.push_str(&format!("{}: (none)\n", Field::MolecularWeight.label())),
    }
    write_out(out, &text)
}

fn write_out<W: Write>(out: &mut W, text: &str) -> Result<(), Error> {
    out.write_all(text.as_bytes()).map_err(|e| Error::io("<stdout>", e))
}
