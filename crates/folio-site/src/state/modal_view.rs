//! Render model for the project modal.

use crate::content::Project;

use super::Carousel;

/// The picture currently on display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PictureView {
    pub index: usize,
    pub src: String,
    pub alt: String,
}

/// Everything the modal renders for one project at one carousel position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub picture: Option<PictureView>,
    /// One flag per picture, true for the active one.
    pub indicators: Vec<bool>,
    pub description: Option<String>,
    pub competences: Vec<String>,
    pub link: Option<String>,
}

impl ModalView {
    /// Derives the view from a project and the carousel position.
    pub fn build(project: &Project, carousel: &Carousel) -> Self {
        let current = carousel
            .current()
            .filter(|&index| index < project.pictures.len());

        let picture = current.map(|index| PictureView {
            index,
            src: project.pictures[index].clone(),
            alt: format!("Picture {} of {}", index + 1, project.title),
        });

        let indicators = (0..project.pictures.len())
            .map(|i| Some(i) == current)
            .collect();

        let description = Some(project.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let link = project
            .github_link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        Self {
            title: project.title.clone(),
            picture,
            indicators,
            description,
            competences: project.competences.clone(),
            link,
        }
    }

    /// Index of the highlighted indicator.
    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|&active| active)
    }

    /// "2 / 5" style position label, `None` without a picture.
    pub fn position_label(&self) -> Option<String> {
        self.picture
            .as_ref()
            .map(|p| format!("{} / {}", p.index + 1, self.indicators.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> Project {
        Project {
            title: "Demo".to_string(),
            pictures: vec!["a.png".into(), "b.png".into(), "c.png".into()],
            description: "desc".to_string(),
            competences: vec!["X".into(), "Y".into()],
            github_link: None,
        }
    }

    #[test]
    fn test_open_view() {
        let project = demo();
        let mut carousel = Carousel::new();
        carousel.open(project.pictures.len());

        let view = ModalView::build(&project, &carousel);
        assert_eq!(view.title, "Demo");
        assert_eq!(view.active_indicator(), Some(0));
        assert_eq!(view.indicators, vec![true, false, false]);
        assert_eq!(view.picture.as_ref().map(|p| p.src.as_str()), Some("a.png"));
        assert_eq!(view.picture.unwrap().alt, "Picture 1 of Demo");
        assert_eq!(view.description.as_deref(), Some("desc"));
        assert_eq!(view.competences, vec!["X", "Y"]);
        assert_eq!(view.link, None);
    }

    #[test]
    fn test_view_follows_carousel() {
        let project = demo();
        let mut carousel = Carousel::new();
        carousel.open(3);
        carousel.previous();

        let view = ModalView::build(&project, &carousel);
        assert_eq!(view.active_indicator(), Some(2));
        assert_eq!(view.position_label().as_deref(), Some("3 / 3"));
    }

    #[test]
    fn test_empty_pictures_render_no_image() {
        let project = Project {
            pictures: Vec::new(),
            ..demo()
        };
        let mut carousel = Carousel::new();
        carousel.open(0);

        let view = ModalView::build(&project, &carousel);
        assert!(view.picture.is_none());
        assert!(view.indicators.is_empty());
        assert_eq!(view.active_indicator(), None);
        assert_eq!(view.position_label(), None);
    }

    #[test]
    fn test_missing_optional_fields() {
        let project = Project {
            description: "   ".to_string(),
            github_link: Some(String::new()),
            ..demo()
        };
        let view = ModalView::build(&project, &Carousel::new());
        assert_eq!(view.description, None);
        assert_eq!(view.link, None);
    }

    #[test]
    fn test_link_present() {
        let project = Project {
            github_link: Some("https://github.com/example/demo".to_string()),
            ..demo()
        };
        let view = ModalView::build(&project, &Carousel::new());
        assert_eq!(view.link.as_deref(), Some("https://github.com/example/demo"));
    }

    #[test]
    fn test_closed_carousel_highlights_nothing() {
        let view = ModalView::build(&demo(), &Carousel::new());
        assert!(view.picture.is_none());
        assert_eq!(view.indicators, vec![false, false, false]);
    }

    #[test]
    fn test_carousel_longer_than_pictures_is_guarded() {
        let mut carousel = Carousel::new();
        carousel.open(5);
        for _ in 0..4 {
            carousel.next();
        }
        let view = ModalView::build(&demo(), &carousel);
        assert!(view.picture.is_none());
    }
}
