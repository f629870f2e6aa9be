use std::sync::Arc;

use crate::db::CaseStore;
use crate::error::Result;
use crate::models::{AnalysisOutcome, CaseCategory, LegalReport};
use crate::services::jurisprudence::JurisprudenceService;

/// Base statutes cited by every report.
const NORMATIVA_BASE: [&str; 3] = ["Ley 20.744", "DNU 70/2023", "Ley 24.901"];

const JURISPRUDENCIA_BASE: &str =
    "Fallos relevantes: Aquino (2004), Vizzoti (2004), Pellicori (2012).";

/// How many retrieved rulings are attached to a stored case.
const MAX_RELATED_RULINGS: usize = 5;

/// Classifies an incoming text by keyword presence. Coarse by design: the
/// first matching bucket wins, and anything unrecognized is treated as a
/// labor conflict.
pub fn classify(text: &str) -> CaseCategory {
    let lowered = text.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

    if contains_any(&["contrato", "cláusula", "clausula", "convenio"]) {
        CaseCategory::Contrato
    } else if contains_any(&["demanda", "expediente", "juzgado", "presentación judicial"]) {
        CaseCategory::PresentacionJudicial
    } else {
        CaseCategory::Conflicto
    }
}

/// Produces the templated report for a category, retrieves related rulings,
/// cross-references prior analyses and records the case durably.
pub struct AnalysisService {
    store: Arc<dyn CaseStore>,
    jurisprudence: Arc<JurisprudenceService>,
}

impl AnalysisService {
    pub fn new(store: Arc<dyn CaseStore>, jurisprudence: Arc<JurisprudenceService>) -> Self {
        Self {
            store,
            jurisprudence,
        }
    }

    /// Classifies `text` and dispatches to the matching analysis.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisOutcome> {
        match classify(text) {
            CaseCategory::Contrato => self.analyze_contract(text).await,
            CaseCategory::Conflicto => self.analyze_conflict(text).await,
            CaseCategory::PresentacionJudicial => self.analyze_filing(text).await,
        }
    }

    pub async fn analyze_contract(&self, text: &str) -> Result<AnalysisOutcome> {
        self.run(CaseCategory::Contrato, text, "contrato").await
    }

    pub async fn analyze_conflict(&self, text: &str) -> Result<AnalysisOutcome> {
        self.run(CaseCategory::Conflicto, text, text).await
    }

    pub async fn analyze_filing(&self, text: &str) -> Result<AnalysisOutcome> {
        self.run(CaseCategory::PresentacionJudicial, text, "demanda")
            .await
    }

    async fn run(
        &self,
        category: CaseCategory,
        text: &str,
        ruling_keyword: &str,
    ) -> Result<AnalysisOutcome> {
        let mut related_rulings = self
            .jurisprudence
            .search_scraped(ruling_keyword)
            .await
            .into_entries();
        related_rulings.truncate(MAX_RELATED_RULINGS);

        let similar_cases = self.store.find_similar(text).await?;

        let report = report_for(category);

        // The analysis is only reported as done once its record is durable;
        // storage failures propagate instead of being swallowed.
        let stored = self
            .store
            .append(
                category.as_str(),
                text,
                &report.resultado,
                &serde_json::to_value(&related_rulings)?,
            )
            .await?;

        Ok(AnalysisOutcome {
            category,
            report,
            related_rulings,
            similar_cases,
            case_id: stored.id,
        })
    }
}

fn report_for(category: CaseCategory) -> LegalReport {
    let normativa = NORMATIVA_BASE.iter().map(|s| s.to_string()).collect();
    match category {
        CaseCategory::Contrato => LegalReport {
            resultado: "El contrato presenta cláusulas abusivas: jornada de 9 horas sin pago \
                        de horas extras, modificación unilateral de condiciones y renuncia a \
                        vacaciones/licencias."
                .to_string(),
            normativa,
            jurisprudencia: JURISPRUDENCIA_BASE.to_string(),
            clasificacion: "No cumple".to_string(),
            riesgos: "Exceso de jornada, renuncia a derechos irrenunciables, potestad \
                      unilateral del empleador."
                .to_string(),
            recomendaciones: "Ajustar jornada a 8 horas, reconocer horas extras, garantizar \
                              vacaciones y licencias."
                .to_string(),
        },
        CaseCategory::Conflicto => LegalReport {
            resultado: "El conflicto refleja incumplimientos graves: falta de pago de horas \
                        extras, reducción unilateral de salario y negación de licencias por \
                        enfermedad."
                .to_string(),
            normativa,
            jurisprudencia: JURISPRUDENCIA_BASE.to_string(),
            clasificacion: "No cumple".to_string(),
            riesgos: "Nulidad de reducción salarial, sanciones por incumplimiento de jornada \
                      y horas extras, vulneración de derechos irrenunciables."
                .to_string(),
            recomendaciones: "Reconocer y pagar horas extras, restituir el salario original, \
                              garantizar licencias por enfermedad."
                .to_string(),
        },
        CaseCategory::PresentacionJudicial => LegalReport {
            resultado: "La presentación reúne los requisitos formales básicos; se identifican \
                        reclamos por despido y rubros indemnizatorios pendientes de prueba."
                .to_string(),
            normativa,
            jurisprudencia: JURISPRUDENCIA_BASE.to_string(),
            clasificacion: "Ambiguo".to_string(),
            riesgos: "Prescripción de créditos laborales, rechazo formal por falta de \
                      documentación respaldatoria."
                .to_string(),
            recomendaciones: "Acompañar recibos de sueldo y telegramas, verificar los plazos \
                              del art. 256 LCT."
                .to_string(),
        },
    }
}
