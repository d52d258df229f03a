mod expire_site;

pub use expire_site::ExpireSiteUseCase;
