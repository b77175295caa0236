//! Level catalog - the fixed, ordered list of quiz rounds.
//!
//! Levels are plain data. The catalog is validated once at construction and is
//! immutable afterwards.

use thiserror::Error;

use crate::hint::word_count;

/// One quiz round: image clues and the answer they spell out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Level {
    pub id: u32,
    pub answer: String,
    /// Image references, in display order.
    pub images: Vec<String>,
    /// Auxiliary clues, independent of the word hints.
    pub content_hints: Vec<String>,
}

impl Level {
    pub fn new(id: u32, answer: impl Into<String>, images: &[&str]) -> Self {
        Self {
            id,
            answer: answer.into(),
            images: images.iter().map(|s| s.to_string()).collect(),
            content_hints: Vec::new(),
        }
    }

    pub fn with_content_hints(mut self, hints: &[&str]) -> Self {
        self.content_hints = hints.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.answer)
    }
}

/// Reasons a list of levels cannot be used as a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no levels")]
    Empty,
    #[error("level {id} has an empty answer")]
    EmptyAnswer { id: u32 },
    #[error("level {id} has no images")]
    NoImages { id: u32 },
    #[error("level id {id} is used more than once")]
    DuplicateId { id: u32 },
}

/// Validated, ordered, non-empty list of levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Build a catalog, rejecting levels the round logic cannot play.
    pub fn new(levels: Vec<Level>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (i, level) in levels.iter().enumerate() {
            if level.word_count() == 0 {
                return Err(CatalogError::EmptyAnswer { id: level.id });
            }
            if level.images.is_empty() {
                return Err(CatalogError::NoImages { id: level.id });
            }
            if levels[..i].iter().any(|other| other.id == level.id) {
                return Err(CatalogError::DuplicateId { id: level.id });
            }
        }

        Ok(Self { levels })
    }

    /// The four Vietnamese history levels shipped with the game.
    pub fn builtin() -> Self {
        Self {
            levels: builtin_levels(),
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// A validated catalog is never empty.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Level> {
        self.levels.iter()
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_levels() -> Vec<Level> {
    vec![
        Level::new(1, "Việt Nam", &["images/viet.jpeg", "images/nam.jpeg"]).with_content_hints(&[
            "Một quốc gia nằm ở khu vực Đông Nam Á.",
            "Quốc gia hình chữ S, có bờ biển dài và thủ đô là Hà Nội.",
            "Tên nước bắt đầu bằng chữ V, có quốc kỳ đỏ sao vàng.",
        ]),
        Level::new(
            2,
            "Phong trào Cần Vương",
            &[
                "images/phong.jpeg",
                "images/trao.png",
                "images/can.jpg",
                "images/vuong.jpg",
            ],
        )
        .with_content_hints(&[
            "Một phong trào yêu nước chống Pháp vào cuối thế kỷ 19.",
            "Phong trào hưởng ứng chiếu chỉ của một vị vua nhà Nguyễn để cứu nước.",
            "Phong trào do vua Hàm Nghi phát động năm 1885.",
        ]),
        Level::new(
            3,
            "Khởi nghĩa Yên Thế",
            &[
                "images/khoi.jpg",
                "images/nghia.jpg",
                "images/yen.jpg",
                "images/the.png",
            ],
        )
        .with_content_hints(&[
            "Một cuộc khởi nghĩa nông dân lớn chống Pháp ở miền Bắc.",
            "Cuộc khởi nghĩa kéo dài gần 30 năm do 'Hùm xám' lãnh đạo.",
            "Cuộc khởi nghĩa vũ trang dài nhất trong lịch sử chống Pháp (1884–1913).",
        ]),
        Level::new(
            4,
            "Ba nước Đông Dương",
            &[
                "images/3.jpg",
                "images/nuoc.jpeg",
                "images/dong.png",
                "images/duong.webp",
            ],
        )
        .with_content_hints(&[
            "Một nhóm quốc gia nằm trên bán đảo cùng tên ở Đông Nam Á.",
            "Ba quốc gia từng nằm trong một liên bang thời Pháp thuộc.",
            "Tên gọi địa lý chung cho 3 nước này trong thời kỳ thuộc địa.",
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = LevelCatalog::builtin();
        let revalidated = LevelCatalog::new(builtin_levels()).unwrap();
        assert_eq!(builtin, revalidated);
        assert_eq!(builtin.len(), 4);
    }

    #[test]
    fn test_builtin_answers_and_hints() {
        let catalog = LevelCatalog::builtin();
        let answers: Vec<&str> = catalog.iter().map(|l| l.answer.as_str()).collect();
        assert_eq!(
            answers,
            [
                "Việt Nam",
                "Phong trào Cần Vương",
                "Khởi nghĩa Yên Thế",
                "Ba nước Đông Dương"
            ]
        );
        assert!(catalog.iter().all(|l| l.content_hints.len() == 3));
        assert_eq!(catalog.get(0).unwrap().images.len(), 2);
        assert!(catalog.get(4).is_none());
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert_eq!(LevelCatalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn test_rejects_blank_answer() {
        let levels = vec![Level::new(7, "   ", &["a.png"])];
        assert_eq!(
            LevelCatalog::new(levels),
            Err(CatalogError::EmptyAnswer { id: 7 })
        );
    }

    #[test]
    fn test_rejects_level_without_images() {
        let levels = vec![Level::new(1, "Huế", &[])];
        assert_eq!(
            LevelCatalog::new(levels),
            Err(CatalogError::NoImages { id: 1 })
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let levels = vec![
            Level::new(1, "Huế", &["a.png"]),
            Level::new(1, "Hà Nội", &["b.png"]),
        ];
        assert_eq!(
            LevelCatalog::new(levels),
            Err(CatalogError::DuplicateId { id: 1 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CatalogError::EmptyAnswer { id: 3 }.to_string(),
            "level 3 has an empty answer"
        );
    }
}
