use manhattan_core::service::RouteService;
use manhattan_osrm::OsrmRouteClient;

pub struct AppState {
    pub service: RouteService<OsrmRouteClient>,
}
