use std::sync::Arc;

use fairkick::generator::TeamGenerator;


pub struct HttpServerStateImpl {
    pub generator: Arc<dyn TeamGenerator>,
}

pub type HttpServerState = Arc<HttpServerStateImpl>;

pub fn new_server_state(generator: Arc<dyn TeamGenerator>) -> HttpServerState {
    Arc::new(HttpServerStateImpl { generator })
}
