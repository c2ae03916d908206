//! Operator remark catalogs

static REMARKS_PT: &[&str] = &[
    "Placa parcialmente encoberta",
    "Leitura manual recomendada",
    "Reflexo intenso na captura",
    "Veículo fora da faixa esperada",
    "Imagem com baixa nitidez",
    "Possível placa adulterada",
    "Captura duplicada em câmera vizinha",
];

static REMARKS_EN: &[&str] = &[
    "Plate partially obscured",
    "Manual review recommended",
    "Strong glare in capture",
    "Vehicle outside expected lane",
    "Low image sharpness",
    "Possible tampered plate",
    "Duplicate capture on neighboring camera",
];

/// Remark catalog for a locale; any `pt*` locale gets the Portuguese set
pub fn remarks_for(locale: &str) -> &'static [&'static str] {
    if locale.starts_with("pt") {
        REMARKS_PT
    } else {
        REMARKS_EN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_selection() {
        assert_eq!(remarks_for("pt_BR"), REMARKS_PT);
        assert_eq!(remarks_for("pt"), REMARKS_PT);
        assert_eq!(remarks_for("en_US"), REMARKS_EN);
        assert_eq!(remarks_for(""), REMARKS_EN);
    }
}
