/*! Dataset loading.

The dataset is a CSV file with a sample identifier column (`ID`),
a reference column (`EN_disfluent`) and one `<LANG>_disfluent` column per target language.

Language columns are resolved once, when the header is read, into a [Schema].
Rows are then loaded into [Sample]s whose texts are aligned with the schema.
Empty cells, and cells holding a missing-value marker (`NA`, `N/A`, `nan`, `null`...),
are absent values.
!*/
use std::{fs::File, io::Read, path::Path};

use log::{debug, info};

use crate::error::Error;
use crate::lang;

/// Cell values read as missing, on top of empty cells.
const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(value: &str) -> bool {
    value.is_empty() || MISSING_MARKERS.contains(&value)
}

/// Default sample identifier column.
pub const ID_COLUMN: &str = "ID";

/// A language text column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangColumn {
    code: String,
    column: String,
    idx: usize,
}

impl LangColumn {
    fn new(code: &str, idx: usize) -> Self {
        Self {
            code: code.to_string(),
            column: lang::column_name(code),
            idx,
        }
    }

    /// Language code (`CS`).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Column name (`CS_disfluent`).
    pub fn column(&self) -> &str {
        &self.column
    }
}

/// Resolved dataset layout.
#[derive(Debug, Clone)]
pub struct Schema {
    id_idx: usize,
    reference: LangColumn,
    langs: Vec<LangColumn>,
}

impl Schema {
    /// Resolve a schema from CSV headers.
    ///
    /// If `langs` is [None], every `*_disfluent` column but the reference one is used,
    /// in header order. Otherwise the given languages are used and each one must have a column.
    pub fn from_headers(
        headers: &csv::StringRecord,
        id_column: &str,
        reference: &str,
        langs: Option<&[String]>,
    ) -> Result<Self, Error> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| Error::MissingColumn(name.to_string()))
        };

        let id_idx = position(id_column)?;
        let reference = LangColumn::new(reference, position(&lang::column_name(reference))?);

        let langs = match langs {
            Some(codes) => codes
                .iter()
                .map(|code| Ok(LangColumn::new(code, position(&lang::column_name(code))?)))
                .collect::<Result<Vec<_>, Error>>()?,
            None => headers
                .iter()
                .enumerate()
                .filter_map(|(idx, h)| lang::code_of(h).map(|code| (idx, code)))
                .filter(|(_, code)| *code != reference.code())
                .map(|(idx, code)| LangColumn::new(code, idx))
                .collect(),
        };

        debug!(
            "schema: id={}, reference={}, langs={:?}",
            id_column,
            reference.column(),
            langs.iter().map(LangColumn::code).collect::<Vec<_>>()
        );

        Ok(Self {
            id_idx,
            reference,
            langs,
        })
    }

    pub fn reference(&self) -> &LangColumn {
        &self.reference
    }

    /// Target languages (reference excluded).
    pub fn langs(&self) -> &[LangColumn] {
        &self.langs
    }

    /// Reference then target languages.
    pub fn all_langs(&self) -> impl Iterator<Item = &LangColumn> {
        std::iter::once(&self.reference).chain(self.langs.iter())
    }
}

/// A dataset row.
///
/// `texts` is aligned with [Schema::langs].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub id: String,
    pub reference: Option<String>,
    pub texts: Vec<Option<String>>,
}

impl Sample {
    fn from_record(record: &csv::StringRecord, schema: &Schema) -> Self {
        let cell = |idx: usize| {
            record
                .get(idx)
                .filter(|value| !is_missing(value))
                .map(String::from)
        };

        Self {
            id: record.get(schema.id_idx).unwrap_or_default().to_string(),
            reference: cell(schema.reference.idx),
            texts: schema.langs.iter().map(|l| cell(l.idx)).collect(),
        }
    }

    /// Iterate over (language code, text) for target languages.
    pub fn texts<'a>(
        &'a self,
        schema: &'a Schema,
    ) -> impl Iterator<Item = (&'a str, Option<&'a str>)> {
        schema
            .langs()
            .iter()
            .zip(self.texts.iter())
            .map(|(l, t)| (l.code(), t.as_deref()))
    }

    /// Same as [Sample::texts], with the reference first.
    pub fn all_texts<'a>(
        &'a self,
        schema: &'a Schema,
    ) -> impl Iterator<Item = (&'a str, Option<&'a str>)> {
        std::iter::once((schema.reference().code(), self.reference.as_deref()))
            .chain(self.texts(schema))
    }
}

/// In-memory dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    schema: Schema,
    samples: Vec<Sample>,
}

/// Options used when loading a [Dataset].
#[derive(Debug, Clone)]
pub struct DatasetOptions {
    pub id_column: String,
    pub reference: String,
    /// Explicit target languages. Discovered from headers when [None].
    pub langs: Option<Vec<String>>,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            id_column: ID_COLUMN.to_string(),
            reference: lang::REFERENCE_LANG.to_string(),
            langs: None,
        }
    }
}

impl Dataset {
    pub fn from_path(path: &Path, options: &DatasetOptions) -> Result<Self, Error> {
        info!("loading dataset {:?}", path);
        let f = File::open(path)?;
        Self::from_reader(f, options)
    }

    pub fn from_reader<R: Read>(reader: R, options: &DatasetOptions) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new().from_reader(reader);
        let schema = Schema::from_headers(
            rdr.headers()?,
            &options.id_column,
            &options.reference,
            options.langs.as_deref(),
        )?;

        let samples = rdr
            .records()
            .map(|record| record.map(|r| Sample::from_record(&r, &schema)))
            .collect::<Result<Vec<_>, _>>()?;

        info!("loaded {} samples", samples.len());
        Ok(Self { schema, samples })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
