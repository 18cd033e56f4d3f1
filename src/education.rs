//! Educational topic articles and the planetary-defense quiz.
//!
//! Content is static reference data; the quiz progression itself is a
//! small pure state machine so it can be tested without UI.

/// One readable topic in the education view.
#[derive(Clone, Copy, Debug)]
pub struct Topic {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

/// One multiple-choice quiz question.
#[derive(Clone, Copy, Debug)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options` of the correct answer.
    pub correct: usize,
    pub explanation: &'static str,
}

/// Topic articles, in display order.
pub static TOPICS: &[Topic] = &[
    Topic {
        id: "detection",
        title: "Asteroid Detection",
        content: "Near-Earth asteroids are detected using a combination of \
ground-based telescopes and space-based observatories. NASA's Catalina Sky \
Survey, Pan-STARRS, and the NEOWISE mission are among the primary detection \
systems.\n\nOnce detected, asteroids are tracked to determine their orbits \
and assess potential collision risks. The Torino Scale and Palermo Technical \
Impact Hazard Scale are used to categorize impact threats.\n\nOver 30,000 \
near-Earth asteroids have been discovered, with new ones found every week. \
The goal is to detect 90% of asteroids larger than 140 meters.",
    },
    Topic {
        id: "types",
        title: "Types of Asteroids",
        content: "Asteroids are classified into three main types:\n\n\
• C-type (Carbonaceous): Dark asteroids rich in carbon, making up about 75% \
of known asteroids.\n\n\
• S-type (Silicaceous): Bright asteroids composed of silicate materials and \
nickel-iron, comprising about 17% of asteroids.\n\n\
• M-type (Metallic): Metallic asteroids primarily composed of iron and \
nickel.\n\nNear-Earth asteroids are further classified by their orbits as \
Atens, Apollos, or Amors, based on their relationship to Earth's orbit.",
    },
    Topic {
        id: "impact",
        title: "Impact Physics",
        content: "When an asteroid impacts Earth, it releases enormous \
amounts of kinetic energy. The impact creates:\n\n\
• A crater many times larger than the asteroid itself\n\
• A blast wave that can level structures over vast areas\n\
• Seismic waves equivalent to major earthquakes\n\
• Thermal radiation that can ignite fires\n\
• Atmospheric effects including dust and debris\n\n\
The Chicxulub impact 66 million years ago, which contributed to dinosaur \
extinction, released energy equivalent to 100 million megatons of TNT.",
    },
    Topic {
        id: "defense",
        title: "Planetary Defense",
        content: "Multiple strategies exist for deflecting dangerous \
asteroids:\n\n\
• Kinetic Impact: Crashing a spacecraft into the asteroid (NASA DART \
mission proved this in 2022)\n\n\
• Nuclear Deflection: Using a nuclear explosion to vaporize material and \
create thrust\n\n\
• Gravity Tractor: Using a spacecraft's gravity to slowly pull the asteroid \
off course\n\n\
• Ion Beam Shepherd: Using focused ion beams to gradually change \
trajectory\n\nThe key to all methods is early detection - the earlier we \
detect a threat, the easier it is to deflect.",
    },
    Topic {
        id: "history",
        title: "Historical Impacts",
        content: "Earth has experienced many asteroid impacts throughout \
history:\n\n\
• 2013 Chelyabinsk meteor: 20m asteroid exploded over Russia, injuring \
1,500 people with shockwave\n\n\
• 1908 Tunguska event: 50-60m asteroid exploded over Siberia, flattening \
2,000 km² of forest\n\n\
• 50,000 years ago: Barringer Crater in Arizona created by 50m asteroid\n\n\
• 66 million years ago: Chicxulub impact, 10km asteroid, mass extinction \
event\n\nSmaller impacts occur more frequently, with house-sized asteroids \
entering Earth's atmosphere about once per year.",
    },
];

/// Quiz questions, asked in order.
pub static QUIZ: &[QuizQuestion] = &[
    QuizQuestion {
        question: "Approximately how many near-Earth asteroids have been discovered?",
        options: &["5,000", "15,000", "30,000", "50,000"],
        correct: 2,
        explanation: "Over 30,000 near-Earth asteroids have been discovered, \
                      with new ones found every week.",
    },
    QuizQuestion {
        question: "Which mission successfully demonstrated the kinetic impact deflection technique?",
        options: &["NASA DART", "ESA Rosetta", "JAXA Hayabusa", "NASA OSIRIS-REx"],
        correct: 0,
        explanation: "NASA's DART mission successfully impacted the asteroid \
                      Dimorphos in 2022, changing its orbit.",
    },
    QuizQuestion {
        question: "What caused the Tunguska event in 1908?",
        options: &["Volcanic eruption", "Earthquake", "Asteroid explosion", "Nuclear test"],
        correct: 2,
        explanation: "A 50-60 meter asteroid exploded over Siberia, \
                      flattening 2,000 km² of forest.",
    },
    QuizQuestion {
        question: "What is the primary advantage of early asteroid detection?",
        options: &["Better photos", "Easier deflection", "More time to panic", "Scientific research"],
        correct: 1,
        explanation: "Early detection makes deflection much easier, as \
                      smaller trajectory changes are needed with more time.",
    },
    QuizQuestion {
        question: "Which asteroid type is most common?",
        options: &["M-type (Metallic)", "S-type (Silicaceous)", "C-type (Carbonaceous)", "X-type"],
        correct: 2,
        explanation: "C-type (Carbonaceous) asteroids make up about 75% of \
                      known asteroids.",
    },
];

/// Progress through the quiz: answer, reveal, advance, finish.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizState {
    /// Index of the question being shown.
    pub current: usize,
    /// Option chosen for the current question, if any.
    pub chosen: Option<usize>,
    /// Correct answers so far.
    pub score: usize,
    /// Set once the last question has been advanced past.
    pub finished: bool,
}

impl QuizState {
    /// The question currently being shown, or None when finished.
    pub fn question(&self) -> Option<&'static QuizQuestion> {
        if self.finished {
            None
        } else {
            QUIZ.get(self.current)
        }
    }

    /// Record an answer for the current question. Ignored if one was
    /// already chosen (the reveal is showing) or the quiz is over.
    pub fn choose(&mut self, option: usize) {
        if self.finished || self.chosen.is_some() {
            return;
        }
        let Some(question) = QUIZ.get(self.current) else {
            return;
        };
        if option >= question.options.len() {
            return;
        }
        self.chosen = Some(option);
        if option == question.correct {
            self.score += 1;
        }
    }

    /// Move to the next question after the reveal; finishes the quiz
    /// after the last one.
    pub fn advance(&mut self) {
        if self.finished || self.chosen.is_none() {
            return;
        }
        self.chosen = None;
        self.current += 1;
        if self.current >= QUIZ.len() {
            self.finished = true;
        }
    }

    /// Restart from the first question.
    pub fn reset(&mut self) {
        *self = QuizState::default();
    }
}
