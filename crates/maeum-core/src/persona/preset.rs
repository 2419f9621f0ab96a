//! Built-in persona catalog.

use super::model::{Persona, PersonaId};

/// The four personas, in the order they are presented.
pub(super) static PERSONAS: [Persona; 4] = [
    Persona {
        id: PersonaId::Pepe,
        name: "마음박사 페페",
        key: "pepe",
        description: "따뜻하고 다정하게\n박사님 스타일의 마음 읽기",
        main_color: "#E91E63",
        highlight_color: "#F8BBD0",
        result_subtitle: "그림을 따뜻하게 이해해 주는 마음 박사 페페의",
    },
    Persona {
        id: PersonaId::Labong,
        name: "현실친구 라봉이",
        key: "labong",
        description: "솔직하지만 애정있는\n찐한 친구 스타일의 마음 읽기",
        main_color: "#FF9800",
        highlight_color: "#FFE0B2",
        result_subtitle: "할 말은 하지만, 애정을 놓치지 않는 현실친구 라봉이의",
    },
    Persona {
        id: PersonaId::Pico,
        name: "칭찬봇 피코",
        key: "pico",
        description: "완벽하게 스캔하는\n로봇 스타일의 마음 읽기",
        main_color: "#4CAF50",
        highlight_color: "#C8E6C9",
        result_subtitle: "그림을 스캔해서 무한 칭찬 쏟아내는 칭찬봇 피코의",
    },
    Persona {
        id: PersonaId::Shasha,
        name: "카리스마 샤샤",
        key: "shasha",
        description: "쿨 하고 센스 있는\n사나이 스타일의 마음 읽기",
        main_color: "#03A9F4",
        highlight_color: "#B3E5FC",
        result_subtitle: "쿨 하지만 속마음은 응원 가득한 카리스마 샤샤의",
    },
];

/// Returns the persona catalog in display order.
pub fn catalog() -> &'static [Persona] {
    &PERSONAS
}
