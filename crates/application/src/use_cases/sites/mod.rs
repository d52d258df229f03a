mod block_site;
mod get_site_status;
mod list_sites;
mod temporary_unblock;
mod track_site;
mod untrack_site;

pub use block_site::BlockSiteUseCase;
pub use get_site_status::{GetSiteStatusUseCase, SiteStatus};
pub use list_sites::ListSitesUseCase;
pub use temporary_unblock::TemporaryUnblockUseCase;
pub use track_site::TrackSiteUseCase;
pub use untrack_site::UntrackSiteUseCase;
