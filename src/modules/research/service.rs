use scholarlink_core::AppError;
use scholarlink_db::ResearchRepository;
use scholarlink_models::{CreateResearchDto, NewResearch, Research, ResearchWithProfessor, User};
use tracing::{info, instrument};

pub struct ResearchService;

impl ResearchService {
    /// Post a research opportunity owned by `professor`.
    #[instrument(skip(research, professor, dto), fields(professor_id = %professor.id))]
    pub async fn create_research(
        research: &dyn ResearchRepository,
        professor: &User,
        dto: CreateResearchDto,
    ) -> Result<Research, AppError> {
        let new = NewResearch::from_dto(dto, professor.id.clone(), professor.university.clone());
        let created = research.create(new).await.map_err(AppError::database)?;

        info!(research_id = %created.id, "research posted");
        Ok(created)
    }

    #[instrument(skip(research))]
    pub async fn list_research(
        research: &dyn ResearchRepository,
    ) -> Result<Vec<ResearchWithProfessor>, AppError> {
        research.list_with_professor().await.map_err(AppError::database)
    }
}
