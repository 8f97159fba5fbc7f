use log::{error, info};
use survey_levels::SurveyApp;
use survey_levels::data::{read_survey_embedded, read_survey_from_path};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let path = std::env::args().nth(1);
    let loaded = match &path {
        Some(p) => read_survey_from_path(p),
        None => read_survey_embedded(),
    };

    let app = match loaded {
        Ok(survey) => {
            let mut app = SurveyApp::from_survey(survey);
            app.source = path.map(Into::into);
            info!("{} categorías resueltas", app.levels().len());
            app
        }
        Err(e) => {
            error!("No se pudo cargar la encuesta: {e}");
            let mut app = SurveyApp::default();
            app.source = path.map(Into::into);
            app.message = e.to_string();
            app
        }
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Resumen de niveles",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
