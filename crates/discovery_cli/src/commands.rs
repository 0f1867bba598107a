//! Command dispatch and plain-text views.
//!
//! # Responsibility
//! - Initialize the catalogs once, then run exactly one query command.
//! - Render results to stdout; errors go back to `main`.

use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

use discovery_core::derivation::layout::{GRID_COLUMNS, GRID_ROWS};
use discovery_core::{
    format_number, Block, CelestialBody, ConfigError, DirSource, DiscoveryCatalogs, Element,
    ElementCatalog, ElementCategory, GridPosition, RepoError, RepoResult, SourceReader,
    ROOM_TEMPERATURE_KELVIN,
};
use log::info;

use crate::cli::{Command, ElementFilter};

#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Repo(RepoError),
    Logging(discovery_core::LoggingError),
    NotFound { kind: &'static str, key: String },
    Output(io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "logging setup failed: {err}"),
            Self::NotFound { kind, key } => write!(f, "no {kind} matches `{key}`"),
            Self::Output(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Output(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<discovery_core::LoggingError> for CliError {
    fn from(value: discovery_core::LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Output(value)
    }
}

pub type CliResult<T> = Result<T, CliError>;

type Catalogs = DiscoveryCatalogs<DirSource>;

pub fn dispatch(command: Command, catalogs: &Catalogs) -> CliResult<()> {
    let summary = catalogs.initialize()?;
    info!(
        "event=cli_ready module=cli status=ok elements={} bodies={}",
        summary.elements, summary.bodies
    );

    let mut out = io::stdout().lock();
    match command {
        Command::Elements(filter) => list_elements(&mut out, catalogs, &filter),
        Command::Element { key } => show_element(&mut out, catalogs, &key),
        Command::Grid => print_grid(&mut out, catalogs),
        Command::Bodies => list_bodies(&mut out, catalogs),
        Command::Body { id } => show_body(&mut out, catalogs, &id),
        Command::Compare { first, second } => compare(&mut out, catalogs, &first, &second),
        Command::Weight { body, earth_weight } => weight(&mut out, catalogs, &body, earth_weight),
    }
}

/// Elements passing every given filter, in catalog order.
fn filtered_elements<'a, S: SourceReader>(
    catalog: &'a ElementCatalog<S>,
    filter: &ElementFilter,
) -> RepoResult<Vec<&'a Element>> {
    let mut selected: Vec<&Element> = catalog.all()?.iter().collect();
    if let Some(category) = filter.category.as_deref() {
        keep_only(&mut selected, catalog.by_category(ElementCategory::from_raw(category))?);
    }
    if let Some(block) = filter.block.as_deref() {
        keep_only(&mut selected, catalog.by_block(Block::from_raw(block))?);
    }
    if let Some(period) = filter.period {
        keep_only(&mut selected, catalog.by_period(period)?);
    }
    if let Some(group) = filter.group {
        keep_only(&mut selected, catalog.by_group(group)?);
    }
    Ok(selected)
}

fn keep_only(selected: &mut Vec<&Element>, allowed: Vec<&Element>) {
    let numbers: HashSet<u32> = allowed.iter().map(|element| element.atomic_number).collect();
    selected.retain(|element| numbers.contains(&element.atomic_number));
}

fn list_elements(
    out: &mut impl Write,
    catalogs: &Catalogs,
    filter: &ElementFilter,
) -> CliResult<()> {
    for element in filtered_elements(catalogs.elements(), filter)? {
        writeln!(
            out,
            "{:>3}  {:<3} {:<14} {:>10}  {}",
            element.atomic_number,
            element.symbol,
            element.name,
            format_number(element.atomic_mass),
            element.category
        )?;
    }
    Ok(())
}

fn find_element<'a>(catalogs: &'a Catalogs, key: &str) -> CliResult<&'a Element> {
    let found = match key.trim().parse::<u32>() {
        Ok(number) => catalogs.elements().get_by_number(number)?,
        Err(_) => catalogs.elements().get_by_symbol(key)?,
    };
    found.ok_or_else(|| CliError::NotFound {
        kind: "element",
        key: key.to_string(),
    })
}

fn show_element(out: &mut impl Write, catalogs: &Catalogs, key: &str) -> CliResult<()> {
    let element = find_element(catalogs, key)?;
    let group = element
        .group
        .map_or_else(|| "-".to_string(), |group| group.to_string());
    let position = element.grid_position();

    writeln!(out, "{} ({}) #{}", element.name, element.symbol, element.atomic_number)?;
    writeln!(out, "  category      {}", element.category)?;
    writeln!(out, "  atomic mass   {}", format_number(element.atomic_mass))?;
    writeln!(out, "  period/group  {} / {group}", element.period)?;
    writeln!(out, "  block         {}", element.block)?;
    writeln!(
        out,
        "  particles     p={} n={} e={} valence={}",
        element.protons(),
        element.neutrons(),
        element.electrons(),
        element.valence_electrons()
    )?;
    writeln!(
        out,
        "  at {ROOM_TEMPERATURE_KELVIN} K   {}",
        element.state_at_temperature(ROOM_TEMPERATURE_KELVIN)
    )?;
    if position.is_on_grid() {
        writeln!(out, "  grid cell     row {} col {}", position.row, position.column)?;
    }
    if !element.electron_configuration.is_empty() {
        writeln!(out, "  configuration {}", element.electron_configuration)?;
    }

    let around = catalogs.elements().neighbors(element)?;
    writeln!(
        out,
        "  neighbors     {} | {}",
        around.previous.map_or("-", |e| e.symbol.as_str()),
        around.next.map_or("-", |e| e.symbol.as_str())
    )?;
    Ok(())
}

fn print_grid(out: &mut impl Write, catalogs: &Catalogs) -> CliResult<()> {
    let grid = catalogs.elements().by_grid_position()?;
    for row in 0..GRID_ROWS {
        let line: String = (0..GRID_COLUMNS)
            .map(|column| {
                grid.get(&GridPosition::new(row, column))
                    .map_or_else(|| "   ".to_string(), |e| format!("{:<3}", e.symbol))
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

fn list_bodies(out: &mut impl Write, catalogs: &Catalogs) -> CliResult<()> {
    for body in catalogs.bodies().sorted_by_distance()? {
        writeln!(
            out,
            "{:>2}  {:<10} {:<10} {:>8} M km",
            body.order_from_sun(),
            body.id,
            body.body_type().label(),
            format_number(body.distance_from_sun())
        )?;
    }
    Ok(())
}

fn find_body<'a>(catalogs: &'a Catalogs, key: &str) -> CliResult<&'a CelestialBody> {
    let bodies = catalogs.bodies();
    let found = match bodies.get_by_id(key)? {
        Some(body) => Some(body),
        None => bodies.get_by_name(key)?,
    };
    found.ok_or_else(|| CliError::NotFound {
        kind: "body",
        key: key.to_string(),
    })
}

fn show_body(out: &mut impl Write, catalogs: &Catalogs, key: &str) -> CliResult<()> {
    let body = find_body(catalogs, key)?;
    writeln!(out, "{} [{}]", body.name, body.body_type())?;
    let summary = body.short_description();
    if !summary.is_empty() {
        writeln!(out, "  {summary}")?;
    }
    writeln!(out, "  diameter      {} km", format_number(body.diameter()))?;
    writeln!(out, "  gravity       {} m/s²", format_number(body.surface_gravity()))?;
    writeln!(out, "  mean temp     {} °C", format_number(body.mean_temperature()))?;
    writeln!(out, "  distance      {} M km", format_number(body.distance_from_sun()))?;
    writeln!(out, "  moons         {}", body.moon_count())?;
    if body.has_rings() {
        writeln!(out, "  rings         yes")?;
    }
    for moon in catalogs.bodies().children_of(&body.id)? {
        writeln!(out, "  satellite     {}", moon.name)?;
    }
    Ok(())
}

fn compare(
    out: &mut impl Write,
    catalogs: &Catalogs,
    first: &str,
    second: &str,
) -> CliResult<()> {
    let a = find_body(catalogs, first)?;
    let b = find_body(catalogs, second)?;
    let rows = catalogs
        .compare(&a.id, &b.id)?
        .ok_or_else(|| CliError::NotFound {
            kind: "body pair",
            key: format!("{first}/{second}"),
        })?;

    writeln!(out, "{:<12} {:>16} {:>16} {:>10}", "", a.name, b.name, "variance")?;
    for row in rows {
        writeln!(
            out,
            "{:<12} {:>16} {:>16} {:>10}",
            row.label,
            row.first_display(),
            row.second_display(),
            row.variance().display()
        )?;
    }
    Ok(())
}

fn weight(
    out: &mut impl Write,
    catalogs: &Catalogs,
    key: &str,
    earth_weight: f64,
) -> CliResult<()> {
    let body = find_body(catalogs, key)?;
    match catalogs.weight_on(&body.id, earth_weight)? {
        Some(weight) => writeln!(
            out,
            "{} on Earth weighs {:.1} on {}",
            format_number(earth_weight),
            weight,
            body.name
        )?,
        None => writeln!(out, "{} has no surface gravity on record", body.name)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::filtered_elements;
    use crate::cli::ElementFilter;
    use discovery_core::{ElementCatalog, MemorySource};

    const ELEMENTS: &str = r#"{
        "version": 1,
        "elements": [
            {"atomicNumber": 2, "symbol": "He", "name": "Helium", "atomicMass": 4.0026,
             "category": "NOBLE_GAS", "period": 1, "group": 18, "block": "s"},
            {"atomicNumber": 3, "symbol": "Li", "name": "Lithium", "atomicMass": 6.94,
             "category": "ALKALI_METAL", "period": 2, "group": 1, "block": "s"},
            {"atomicNumber": 10, "symbol": "Ne", "name": "Neon", "atomicMass": 20.18,
             "category": "NOBLE_GAS", "period": 2, "group": 18, "block": "p"}
        ]
    }"#;

    fn filter() -> ElementFilter {
        ElementFilter {
            category: None,
            period: None,
            group: None,
            block: None,
        }
    }

    fn symbols(catalog: &ElementCatalog<MemorySource>, filter: &ElementFilter) -> Vec<String> {
        filtered_elements(catalog, filter)
            .unwrap()
            .into_iter()
            .map(|element| element.symbol.clone())
            .collect()
    }

    #[test]
    fn filters_combine_with_and() {
        let source = MemorySource::new().with("elements.json", ELEMENTS);
        let catalog = ElementCatalog::new(source, "elements.json");
        catalog.load().unwrap();

        assert_eq!(symbols(&catalog, &filter()), vec!["He", "Li", "Ne"]);

        let mut noble = filter();
        noble.category = Some("noble gas".to_string());
        assert_eq!(symbols(&catalog, &noble), vec!["He", "Ne"]);

        noble.period = Some(2);
        assert_eq!(symbols(&catalog, &noble), vec!["Ne"]);

        noble.block = Some("s".to_string());
        assert!(symbols(&catalog, &noble).is_empty());

        let mut first_group = filter();
        first_group.group = Some(1);
        assert_eq!(symbols(&catalog, &first_group), vec!["Li"]);
    }
}
