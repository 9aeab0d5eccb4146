use super::domain::RiskLevel;

pub(crate) const BASE_LOW: &[&str] = &[
    "Manter o monitoramento periódico do fornecedor",
    "Revisar o contrato na próxima renovação",
];

pub(crate) const BASE_MEDIUM: &[&str] = &[
    "Solicitar plano de ação para as lacunas identificadas",
    "Incluir cláusulas de proteção de dados no contrato",
    "Acompanhar a implementação das melhorias em até 90 dias",
];

pub(crate) const BASE_HIGH: &[&str] = &[
    "Exigir plano de ação formal com prazos definidos",
    "Incluir cláusulas contratuais específicas de LGPD",
    "Solicitar evidências dos controles declarados",
    "Restringir o compartilhamento de dados ao mínimo necessário",
];

pub(crate) const BASE_CRITICAL: &[&str] = &[
    "Suspender o compartilhamento de dados até a mitigação",
    "Escalar a avaliação para o Encarregado (DPO)",
    "Exigir plano de ação imediato com acompanhamento semanal",
    "Avaliar a substituição do fornecedor",
    "Realizar auditoria presencial ou remota",
];

pub(crate) const TECH_LOW: &[&str] =
    &["Confirmar anualmente a validade das certificações de segurança"];

pub(crate) const TECH_MEDIUM: &[&str] = &[
    "Verificar criptografia de dados em repouso e em trânsito",
    "Solicitar relatório do último teste de intrusão",
];

pub(crate) const TECH_HIGH: &[&str] = &[
    "Exigir autenticação multifator em todos os acessos",
    "Solicitar teste de intrusão independente",
    "Revisar a política de retenção de logs",
];

pub(crate) const TECH_CRITICAL: &[&str] = &[
    "Revogar acessos privilegiados do fornecedor aos sistemas",
    "Exigir teste de intrusão independente antes de retomar a integração",
    "Validar o plano de resposta a incidentes e recuperação de desastres",
    "Implementar monitoramento contínuo das integrações",
];

fn base_actions(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Low => BASE_LOW,
        RiskLevel::Medium => BASE_MEDIUM,
        RiskLevel::High => BASE_HIGH,
        RiskLevel::Critical => BASE_CRITICAL,
    }
}

fn technology_actions(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Low => TECH_LOW,
        RiskLevel::Medium => TECH_MEDIUM,
        RiskLevel::High => TECH_HIGH,
        RiskLevel::Critical => TECH_CRITICAL,
    }
}

/// Mitigation actions for a risk band: the base list, then the technology
/// supplement when the supplier provides technology services.
pub fn recommended_actions(level: RiskLevel, is_technology: bool) -> Vec<String> {
    let mut actions: Vec<String> = base_actions(level)
        .iter()
        .map(|action| action.to_string())
        .collect();

    if is_technology {
        actions.extend(technology_actions(level).iter().map(|action| action.to_string()));
    }

    actions
}
