/// Service layer for the publishing workflow
///
/// This module provides the network-facing logic:
/// - Draft store: persistence to and from the durable draft record
/// - Series directory: the data source behind the series detour
/// - Publish pipeline: the three-phase publish protocol
pub mod drafts;
pub mod publish;
pub mod series;
