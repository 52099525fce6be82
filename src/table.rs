use crate::{
  codes::MULTICODEC_TABLE,
  error::{
    Error,
    Result,
  },
};
use alloc::{
  borrow::{
    Cow,
    ToOwned,
  },
  string::String,
};
use sp_std::{
  collections::btree_map::BTreeMap,
  vec::Vec,
};

/// A single row of a code table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
  name: Cow<'static, str>,
  tag: Cow<'static, str>,
  code: u64,
  description: Cow<'static, str>,
}

impl Entry {
  /// Human-readable name, e.g. `sha2-256`.
  pub fn name(&self) -> &str { &self.name }

  /// Category of the code, e.g. `multihash` or `multiaddr`.
  pub fn tag(&self) -> &str { &self.tag }

  pub fn code(&self) -> u64 { self.code }

  pub fn description(&self) -> &str { &self.description }
}

/// A bidirectional map between names and reserved codes.
///
/// A table is assembled once through a [`CodeTableBuilder`] and is read-only
/// from then on, so it can be shared between threads by reference without
/// locking. Names and codes are each unique within a table.
#[derive(Clone, Debug, Default)]
pub struct CodeTable {
  entries: Vec<Entry>,
  by_name: BTreeMap<Cow<'static, str>, usize>,
  by_code: BTreeMap<u64, usize>,
}

impl CodeTable {
  pub fn builder() -> CodeTableBuilder { CodeTableBuilder::default() }

  /// Builds a table from `(name, tag, code, description)` rows.
  ///
  /// # Errors
  ///
  /// Returns `Error::DuplicateTableEntry` on the first row whose name or code
  /// was already registered.
  pub fn from_entries<I, N, T, D>(rows: I) -> Result<Self>
  where
    I: IntoIterator<Item = (N, T, u64, D)>,
    N: Into<Cow<'static, str>>,
    T: Into<Cow<'static, str>>,
    D: Into<Cow<'static, str>>, {
    let mut builder = Self::builder();
    for (name, tag, code, description) in rows {
      builder.register(name, tag, code, description)?;
    }
    Ok(builder.build())
  }

  /// The compiled-in multicodec table.
  ///
  /// # Errors
  ///
  /// Returns `Error::DuplicateTableEntry` if the compiled-in rows are
  /// corrupt. Callers should treat this as fatal at startup.
  pub fn multicodec() -> Result<Self> {
    Self::from_entries(MULTICODEC_TABLE.iter().copied())
  }

  pub fn entry_by_name(&self, name: &str) -> Option<&Entry> {
    self.by_name.get(name).map(|&i| &self.entries[i])
  }

  pub fn entry_by_code(&self, code: u64) -> Option<&Entry> {
    self.by_code.get(&code).map(|&i| &self.entries[i])
  }

  /// Resolves a name to its code. The match is exact.
  ///
  /// # Errors
  ///
  /// Returns `Error::UnknownName` if no entry has this name.
  pub fn code_of(&self, name: &str) -> Result<u64> {
    self
      .entry_by_name(name)
      .map(Entry::code)
      .ok_or_else(|| Error::UnknownName(name.to_owned()))
  }

  /// Resolves a code to its name.
  ///
  /// # Errors
  ///
  /// Returns `Error::UnknownCode` if no entry has this code.
  pub fn name_of(&self, code: u64) -> Result<&str> {
    self.entry_by_code(code).map(Entry::name).ok_or(Error::UnknownCode(code))
  }

  pub fn contains_name(&self, name: &str) -> bool {
    self.by_name.contains_key(name)
  }

  pub fn contains_code(&self, code: u64) -> bool {
    self.by_code.contains_key(&code)
  }

  /// Entries carrying `tag`, in registration order.
  pub fn entries_with_tag<'a>(
    &'a self,
    tag: &'a str,
  ) -> impl Iterator<Item = &'a Entry> + 'a {
    self.entries.iter().filter(move |e| e.tag() == tag)
  }

  /// Entries in registration order.
  pub fn iter(&self) -> core::slice::Iter<'_, Entry> { self.entries.iter() }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl<'a> IntoIterator for &'a CodeTable {
  type IntoIter = core::slice::Iter<'a, Entry>;
  type Item = &'a Entry;

  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Collects entries for a [`CodeTable`]. This is the only way to add rows;
/// a built table cannot be changed.
#[derive(Debug, Default)]
pub struct CodeTableBuilder {
  table: CodeTable,
}

impl CodeTableBuilder {
  /// Adds a row.
  ///
  /// # Errors
  ///
  /// Returns `Error::DuplicateTableEntry` if `name` or `code` is already
  /// present. The builder is left unchanged in that case.
  pub fn register<N, T, D>(
    &mut self,
    name: N,
    tag: T,
    code: u64,
    description: D,
  ) -> Result<&mut Self>
  where
    N: Into<Cow<'static, str>>,
    T: Into<Cow<'static, str>>,
    D: Into<Cow<'static, str>>, {
    let name = name.into();
    let table = &mut self.table;
    if table.by_name.contains_key(&*name) || table.by_code.contains_key(&code)
    {
      log::warn!("rejecting duplicate table entry `{}` ({:#x})", name, code);
      return Err(Error::DuplicateTableEntry {
        name: String::from(&*name),
        code,
      });
    }
    log::trace!("registering `{}` as {:#x}", name, code);
    let index = table.entries.len();
    table.by_name.insert(name.clone(), index);
    table.by_code.insert(code, index);
    table.entries.push(Entry {
      name,
      tag: tag.into(),
      code,
      description: description.into(),
    });
    Ok(self)
  }

  pub fn build(self) -> CodeTable {
    log::debug!("built code table with {} entries", self.table.len());
    self.table
  }
}
