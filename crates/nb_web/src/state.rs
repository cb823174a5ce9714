use nb_inference::Analyst;

pub struct AppState {
    pub analyst: Analyst,
}
