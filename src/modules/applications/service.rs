use scholarlink_core::AppError;
use scholarlink_db::ApplicationRepository;
use scholarlink_models::{Application, CreateApplicationDto, NewApplication, User};
use tracing::{info, instrument};

pub struct ApplicationService;

impl ApplicationService {
    /// Record `student`'s application. The research id is stored as given.
    #[instrument(
        skip(applications, student, dto),
        fields(student_id = %student.id, research_id = %dto.research_id)
    )]
    pub async fn apply(
        applications: &dyn ApplicationRepository,
        student: &User,
        dto: CreateApplicationDto,
    ) -> Result<Application, AppError> {
        let application = applications
            .create(NewApplication {
                student_id: student.id.clone(),
                research_id: dto.research_id,
                application_text: dto.application_text,
            })
            .await
            .map_err(AppError::database)?;

        info!(application_id = %application.id, "application submitted");
        Ok(application)
    }
}
