//! Developer diagnostics, exposed in the browser only on local hosts.

#[derive(Debug, Clone, PartialEq)]
pub struct DebugReport {
    pub is_mobile: bool,
    pub reduced_motion: bool,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub reveal_targets: usize,
    pub merienda_cards: usize,
}

impl DebugReport {
    pub fn lines(&self) -> Vec<String> {
        vec![
            "🔍 Información de Debug - Nutrición Infantil UCC".to_string(),
            format!("📱 Es móvil: {}", self.is_mobile),
            format!("♿ Movimiento reducido: {}", self.reduced_motion),
            format!(
                "📏 Tamaño ventana: {}x{}",
                self.viewport_width as i64, self.viewport_height as i64
            ),
            format!("🎯 Elementos animados: {}", self.reveal_targets),
            format!("🏷️ Cards de merienda: {}", self.merienda_cards),
        ]
    }
}

pub fn is_dev_host(hostname: &str) -> bool {
    matches!(hostname, "localhost" | "127.0.0.1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_hosts() {
        assert!(is_dev_host("localhost"));
        assert!(is_dev_host("127.0.0.1"));
        assert!(!is_dev_host("nutricion.example.org"));
        assert!(!is_dev_host(""));
    }

    #[test]
    fn report_lines_carry_the_values() {
        let report = DebugReport {
            is_mobile: true,
            reduced_motion: false,
            viewport_width: 390.0,
            viewport_height: 844.0,
            reveal_targets: 12,
            merienda_cards: 4,
        };
        let lines = report.lines();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].ends_with("true"));
        assert!(lines[3].ends_with("390x844"));
        assert!(lines[4].ends_with("12"));
        assert!(lines[5].ends_with('4'));
    }
}
