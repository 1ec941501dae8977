//! Command dispatch.

use common::{Action, EntityKind};
use record_store::{InMemoryStore, Record, RecordStore};

use crate::builder::build_record;
use crate::error::{CommandError, Result};
use crate::flags::scan;
use crate::record::{AnyRecord, Place, Settlement, Vendor};

/// Result of a successfully dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An add or remove changed the store.
    Applied,

    /// A show listed every record of the kind, in store order.
    Listing(Vec<AnyRecord>),
}

impl Outcome {
    /// Renders a listing as one line per record. Returns `None` for
    /// [`Outcome::Applied`].
    pub fn into_lines(self) -> Option<Vec<String>> {
        match self {
            Self::Applied => None,
            Self::Listing(records) => Some(records.iter().map(ToString::to_string).collect()),
        }
    }
}

/// Resolves an entity keyword, failing with `UnknownEntity`.
pub fn parse_entity(keyword: &str) -> Result<EntityKind> {
    keyword
        .parse::<EntityKind>()
        .map_err(|_| CommandError::UnknownEntity {
            keyword: keyword.to_string(),
        })
}

/// Routes commands to the store for their entity kind.
///
/// The dispatcher owns one store per kind. Stores are constructed by the
/// caller and passed in, so tests and the binary each decide where
/// records live.
pub struct Dispatcher<
    V = InMemoryStore<Vendor>,
    P = InMemoryStore<Place>,
    S = InMemoryStore<Settlement>,
> where
    V: RecordStore<Vendor>,
    P: RecordStore<Place>,
    S: RecordStore<Settlement>,
{
    vendors: V,
    places: P,
    settlements: S,
}

impl Dispatcher {
    /// Creates a dispatcher over fresh in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new(), InMemoryStore::new(), InMemoryStore::new())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<V, P, S> Dispatcher<V, P, S>
where
    V: RecordStore<Vendor>,
    P: RecordStore<Place>,
    S: RecordStore<Settlement>,
{
    pub fn new(vendors: V, places: P, settlements: S) -> Self {
        Self {
            vendors,
            places,
            settlements,
        }
    }

    pub fn vendors(&self) -> &V {
        &self.vendors
    }

    pub fn places(&self) -> &P {
        &self.places
    }

    pub fn settlements(&self) -> &S {
        &self.settlements
    }

    /// Runs a command given its entity keyword and renders any listing.
    ///
    /// Returns one text line per record for [`Action::Show`] and `None`
    /// for add and remove.
    pub fn execute(
        &self,
        keyword: &str,
        tokens: &[&str],
        action: Action,
    ) -> Result<Option<Vec<String>>> {
        let kind = parse_entity(keyword)?;
        Ok(self.dispatch(kind, tokens, action)?.into_lines())
    }

    /// Scans the tokens, builds the record and applies the action to the
    /// matching store.
    ///
    /// A scan failure never reaches a store, and a store failure leaves
    /// the store unchanged. Each dispatch issues at most one store call.
    /// Settlement vendor and place names are stored as given, without a
    /// lookup in the vendor or place store.
    #[tracing::instrument(skip(self, tokens))]
    pub fn dispatch(&self, kind: EntityKind, tokens: &[&str], action: Action) -> Result<Outcome> {
        metrics::counter!(
            "commands_dispatched_total",
            "entity" => kind.keyword(),
            "action" => action.keyword()
        )
        .increment(1);

        let result = self.run(kind, tokens, action);
        if let Err(err) = &result {
            metrics::counter!(
                "commands_failed_total",
                "entity" => kind.keyword(),
                "action" => action.keyword()
            )
            .increment(1);
            tracing::debug!(error = %err, "command rejected");
        }
        result
    }

    fn run(&self, kind: EntityKind, tokens: &[&str], action: Action) -> Result<Outcome> {
        let fields = scan(tokens)?;
        tracing::debug!(?fields, "flags scanned");

        match (build_record(kind, action, &fields), action) {
            (AnyRecord::Vendor(vendor), Action::Add) => add(&self.vendors, vendor),
            (AnyRecord::Vendor(vendor), Action::Remove) => {
                remove::<Vendor, _>(&self.vendors, &vendor.name)
            }
            (AnyRecord::Vendor(_), Action::Show) => list::<Vendor, _>(&self.vendors),

            (AnyRecord::Place(place), Action::Add) => add(&self.places, place),
            (AnyRecord::Place(place), Action::Remove) => {
                remove::<Place, _>(&self.places, &place.name)
            }
            (AnyRecord::Place(_), Action::Show) => list::<Place, _>(&self.places),

            (AnyRecord::Settlement(settlement), Action::Add) => add(&self.settlements, settlement),
            (AnyRecord::Settlement(_), Action::Remove) => Err(CommandError::UnsupportedAction {
                kind: EntityKind::Settlement,
                action,
            }),
            (AnyRecord::Settlement(_), Action::Show) => list::<Settlement, _>(&self.settlements),
        }
    }
}

fn add<R, St>(store: &St, record: R) -> Result<Outcome>
where
    R: Record,
    St: RecordStore<R>,
{
    store.add(record)?;
    tracing::info!(kind = %R::KIND, "record added");
    Ok(Outcome::Applied)
}

fn remove<R, St>(store: &St, name: &str) -> Result<Outcome>
where
    R: Record,
    St: RecordStore<R>,
{
    store.remove_by_name(name)?;
    tracing::info!(kind = %R::KIND, name, "record removed");
    Ok(Outcome::Applied)
}

fn list<R, St>(store: &St) -> Result<Outcome>
where
    R: Record + Into<AnyRecord>,
    St: RecordStore<R>,
{
    let records = store.list_all()?;
    Ok(Outcome::Listing(records.into_iter().map(Into::into).collect()))
}
