//! Static question bank and the sampling accessor the session draws from.

use crate::models::Category::{Entertainment, General, Geography, History, Science, Sports};
use crate::models::Difficulty::{Easy, Hard, Medium};
use crate::models::{Category, CategoryInfo, Difficulty, OPTIONS_PER_QUESTION, Question};
use lazy_static::lazy_static;
use rand::RngCore;
use rand::seq::SliceRandom;

/// Something the session can draw questions from.
pub trait QuestionSource {
    /// Every question matching both fields, in declaration order. May be empty.
    fn questions_for(&self, category: Category, difficulty: Difficulty) -> Vec<Question>;

    /// Uniformly shuffles the matching pool and keeps the first `count` entries.
    /// A short pool is returned whole, never padded or repeated.
    fn sample(
        &self,
        category: Category,
        difficulty: Difficulty,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<Question> {
        let mut pool = self.questions_for(category, difficulty);
        pool.shuffle(rng);
        pool.truncate(count);
        pool
    }
}

/// The built-in 90 question table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBank;

impl QuestionSource for StaticBank {
    fn questions_for(&self, category: Category, difficulty: Difficulty) -> Vec<Question> {
        BANK.iter()
            .filter(|q| q.category == category && q.difficulty == difficulty)
            .cloned()
            .collect()
    }
}

impl StaticBank {
    pub fn len(&self) -> usize {
        BANK.len()
    }

    pub fn is_empty(&self) -> bool {
        BANK.is_empty()
    }
}

const CATEGORIES: [CategoryInfo; 6] = [
    CategoryInfo {
        id: Science,
        name: "Science",
        icon: "🔬",
        description: "Test your knowledge of physics, chemistry, and biology",
        question_count: 15,
    },
    CategoryInfo {
        id: History,
        name: "History",
        icon: "📜",
        description: "Explore events that shaped our world",
        question_count: 15,
    },
    CategoryInfo {
        id: Geography,
        name: "Geography",
        icon: "🌍",
        description: "Countries, capitals, and landmarks",
        question_count: 15,
    },
    CategoryInfo {
        id: Sports,
        name: "Sports",
        icon: "⚽",
        description: "From Olympics to World Cups",
        question_count: 15,
    },
    CategoryInfo {
        id: Entertainment,
        name: "Entertainment",
        icon: "🎬",
        description: "Movies, music, and pop culture",
        question_count: 15,
    },
    CategoryInfo {
        id: General,
        name: "General Knowledge",
        icon: "💡",
        description: "A mix of everything",
        question_count: 15,
    },
];

pub fn categories() -> &'static [CategoryInfo] {
    &CATEGORIES
}

pub fn category_info(category: Category) -> &'static CategoryInfo {
    CATEGORIES
        .iter()
        .find(|info| info.id == category)
        .unwrap_or(&CATEGORIES[0])
}

type Row = (
    u32,
    Category,
    Difficulty,
    &'static str,
    [&'static str; OPTIONS_PER_QUESTION],
    usize,
);

lazy_static! {
    static ref BANK: Vec<Question> = ROWS
        .iter()
        .map(|&(id, category, difficulty, question, options, correct_answer)| Question {
            id,
            category,
            difficulty,
            question: question.to_string(),
            options: options.map(str::to_string),
            correct_answer,
            time_limit: difficulty.time_per_question(),
        })
        .collect();
}

#[rustfmt::skip]
const ROWS: &[Row] = &[
    (1, Science, Easy, "What is the chemical symbol for water?", ["H2O", "CO2", "NaCl", "O2"], 0),
    (2, Science, Easy, "What planet is known as the Red Planet?", ["Venus", "Mars", "Jupiter", "Saturn"], 1),
    (3, Science, Easy, "What is the largest organ in the human body?", ["Heart", "Brain", "Skin", "Liver"], 2),
    (4, Science, Easy, "How many bones are in the adult human body?", ["186", "206", "226", "246"], 1),
    (5, Science, Easy, "What gas do plants absorb from the atmosphere?", ["Oxygen", "Nitrogen", "Carbon Dioxide", "Hydrogen"], 2),
    (6, Science, Medium, "What is the speed of light in vacuum?", ["299,792 km/s", "150,000 km/s", "1,080 km/h", "343 m/s"], 0),
    (7, Science, Medium, "Which element has the atomic number 79?", ["Silver", "Platinum", "Gold", "Copper"], 2),
    (8, Science, Medium, "What is the powerhouse of the cell?", ["Nucleus", "Ribosome", "Mitochondria", "Golgi Body"], 2),
    (9, Science, Medium, "What type of bond involves sharing electrons?", ["Ionic", "Covalent", "Metallic", "Hydrogen"], 1),
    (10, Science, Medium, "What is the most abundant gas in Earth's atmosphere?", ["Oxygen", "Carbon Dioxide", "Nitrogen", "Argon"], 2),
    (11, Science, Hard, "What is the Heisenberg Uncertainty Principle about?", ["Energy conservation", "Position and momentum", "Mass-energy equivalence", "Wave-particle duality"], 1),
    (12, Science, Hard, "What is the half-life of Carbon-14?", ["5,730 years", "1,000 years", "10,000 years", "100,000 years"], 0),
    (13, Science, Hard, "Which particle is responsible for the strong nuclear force?", ["Photon", "Gluon", "W boson", "Graviton"], 1),
    (14, Science, Hard, "What is the Chandrasekhar limit?", ["1.4 solar masses", "2.5 solar masses", "3.2 solar masses", "5.0 solar masses"], 0),
    (15, Science, Hard, "What enzyme unwinds DNA during replication?", ["DNA Polymerase", "Helicase", "Ligase", "Primase"], 1),
    (16, History, Easy, "In which year did World War II end?", ["1943", "1944", "1945", "1946"], 2),
    (17, History, Easy, "Who was the first President of the United States?", ["Thomas Jefferson", "George Washington", "Abraham Lincoln", "John Adams"], 1),
    (18, History, Easy, "Which ancient wonder was located in Egypt?", ["Hanging Gardens", "Colossus", "Great Pyramid", "Lighthouse"], 2),
    (19, History, Easy, "What year did the Titanic sink?", ["1910", "1912", "1914", "1916"], 1),
    (20, History, Easy, "Who painted the Mona Lisa?", ["Michelangelo", "Raphael", "Leonardo da Vinci", "Donatello"], 2),
    (21, History, Medium, "What year did the Berlin Wall fall?", ["1987", "1988", "1989", "1990"], 2),
    (22, History, Medium, "Who was the first Emperor of Rome?", ["Julius Caesar", "Augustus", "Nero", "Caligula"], 1),
    (23, History, Medium, "In which year did India gain independence?", ["1945", "1946", "1947", "1948"], 2),
    (24, History, Medium, "Who discovered America in 1492?", ["Amerigo Vespucci", "Christopher Columbus", "Ferdinand Magellan", "Vasco da Gama"], 1),
    (25, History, Medium, "What was the name of the ship that carried the Pilgrims?", ["Santa Maria", "Mayflower", "Victoria", "Endeavour"], 1),
    (26, History, Hard, "What treaty ended World War I?", ["Treaty of Paris", "Treaty of Versailles", "Treaty of Vienna", "Treaty of Ghent"], 1),
    (27, History, Hard, "Who was the last Tsar of Russia?", ["Alexander III", "Nicholas II", "Peter III", "Ivan IV"], 1),
    (28, History, Hard, "In what year was the Magna Carta signed?", ["1066", "1215", "1492", "1776"], 1),
    (29, History, Hard, "What ancient civilization built Machu Picchu?", ["Aztec", "Maya", "Inca", "Olmec"], 2),
    (30, History, Hard, "Who was the longest-reigning British monarch before Elizabeth II?", ["Queen Victoria", "George III", "Henry VIII", "Elizabeth I"], 0),
    (31, Geography, Easy, "What is the largest continent?", ["Africa", "North America", "Asia", "Europe"], 2),
    (32, Geography, Easy, "What is the capital of France?", ["London", "Berlin", "Madrid", "Paris"], 3),
    (33, Geography, Easy, "Which ocean is the largest?", ["Atlantic", "Indian", "Pacific", "Arctic"], 2),
    (34, Geography, Easy, "What is the longest river in the world?", ["Amazon", "Nile", "Mississippi", "Yangtze"], 1),
    (35, Geography, Easy, "Which country has the largest population?", ["India", "USA", "China", "Russia"], 2),
    (36, Geography, Medium, "What is the smallest country in the world?", ["Monaco", "San Marino", "Vatican City", "Liechtenstein"], 2),
    (37, Geography, Medium, "Which desert is the largest hot desert?", ["Gobi", "Kalahari", "Sahara", "Arabian"], 2),
    (38, Geography, Medium, "What is the capital of Australia?", ["Sydney", "Melbourne", "Canberra", "Perth"], 2),
    (39, Geography, Medium, "Which mountain is the tallest in the world?", ["K2", "Kangchenjunga", "Mount Everest", "Lhotse"], 2),
    (40, Geography, Medium, "How many countries are in Africa?", ["44", "54", "64", "74"], 1),
    (41, Geography, Hard, "What is the deepest point in the ocean?", ["Puerto Rico Trench", "Mariana Trench", "Java Trench", "Philippine Trench"], 1),
    (42, Geography, Hard, "Which country has the most time zones?", ["Russia", "USA", "France", "China"], 2),
    (43, Geography, Hard, "What is the capital of Kazakhstan?", ["Almaty", "Astana", "Shymkent", "Karaganda"], 1),
    (44, Geography, Hard, "Which African country was never colonized?", ["Ghana", "Nigeria", "Ethiopia", "Kenya"], 2),
    (45, Geography, Hard, "What is the driest place on Earth?", ["Sahara Desert", "Death Valley", "Atacama Desert", "Antarctic Dry Valleys"], 3),
    (46, Sports, Easy, "How many players are on a soccer team?", ["9", "10", "11", "12"], 2),
    (47, Sports, Easy, "In which sport would you perform a slam dunk?", ["Volleyball", "Tennis", "Basketball", "Handball"], 2),
    (48, Sports, Easy, "How many rings are on the Olympic flag?", ["3", "4", "5", "6"], 2),
    (49, Sports, Easy, "What sport is played at Wimbledon?", ["Golf", "Cricket", "Tennis", "Football"], 2),
    (50, Sports, Easy, "In which sport do you use a puck?", ["Lacrosse", "Ice Hockey", "Field Hockey", "Polo"], 1),
    (51, Sports, Medium, "Which country won the first FIFA World Cup?", ["Brazil", "Argentina", "Uruguay", "Italy"], 2),
    (52, Sports, Medium, "How many Grand Slam tennis tournaments are there?", ["3", "4", "5", "6"], 1),
    (53, Sports, Medium, "What is the maximum break in snooker?", ["137", "147", "155", "170"], 1),
    (54, Sports, Medium, "In which year were the first modern Olympics held?", ["1892", "1896", "1900", "1904"], 1),
    (55, Sports, Medium, "How long is a marathon in kilometers?", ["40.195", "42.195", "44.195", "46.195"], 1),
    (56, Sports, Hard, "Who has won the most Grand Slam titles in tennis (men)?", ["Roger Federer", "Rafael Nadal", "Novak Djokovic", "Pete Sampras"], 2),
    (57, Sports, Hard, "What is the diameter of a basketball hoop in inches?", ["16", "17", "18", "19"], 2),
    (58, Sports, Hard, "In cricket, what is a score of 111 called?", ["Century", "Nelson", "Duck", "Maiden"], 1),
    (59, Sports, Hard, "What country invented golf?", ["England", "Ireland", "Scotland", "Netherlands"], 2),
    (60, Sports, Hard, "How many dimples are on a standard golf ball?", ["252", "336", "392", "482"], 1),
    (61, Entertainment, Easy, "What is the name of Mickey Mouse's dog?", ["Goofy", "Pluto", "Donald", "Max"], 1),
    (62, Entertainment, Easy, "Who played Jack in Titanic?", ["Brad Pitt", "Tom Cruise", "Leonardo DiCaprio", "Matt Damon"], 2),
    (63, Entertainment, Easy, "What is the highest-grossing film of all time?", ["Titanic", "Avengers: Endgame", "Avatar", "Star Wars"], 2),
    (64, Entertainment, Easy, "Who sang \"Thriller\"?", ["Prince", "Michael Jackson", "Whitney Houston", "Stevie Wonder"], 1),
    (65, Entertainment, Easy, "What is the name of Harry Potter's owl?", ["Errol", "Hedwig", "Pigwidgeon", "Scabbers"], 1),
    (66, Entertainment, Medium, "Which film won the Oscar for Best Picture in 2020?", ["1917", "Joker", "Parasite", "Once Upon a Time in Hollywood"], 2),
    (67, Entertainment, Medium, "Who directed \"Inception\"?", ["Steven Spielberg", "Christopher Nolan", "Martin Scorsese", "James Cameron"], 1),
    (68, Entertainment, Medium, "What year was the first \"Star Wars\" film released?", ["1975", "1977", "1979", "1981"], 1),
    (69, Entertainment, Medium, "Which band performed \"Bohemian Rhapsody\"?", ["The Beatles", "Led Zeppelin", "Queen", "Pink Floyd"], 2),
    (70, Entertainment, Medium, "How many seasons of \"Friends\" were there?", ["8", "9", "10", "11"], 2),
    (71, Entertainment, Hard, "Who was the first actor to refuse an Oscar?", ["Marlon Brando", "George C. Scott", "Katharine Hepburn", "Dustin Hoffman"], 1),
    (72, Entertainment, Hard, "What was the first feature-length animated film?", ["Fantasia", "Snow White", "Pinocchio", "Bambi"], 1),
    (73, Entertainment, Hard, "Which Beatles album was released first?", ["Rubber Soul", "Help!", "Please Please Me", "A Hard Day's Night"], 2),
    (74, Entertainment, Hard, "What is the name of the fictional metal in Marvel's Black Panther?", ["Adamantium", "Vibranium", "Uru", "Carbonadium"], 1),
    (75, Entertainment, Hard, "Who composed the music for \"Jaws\"?", ["Hans Zimmer", "John Williams", "Danny Elfman", "Howard Shore"], 1),
    (76, General, Easy, "How many days are in a leap year?", ["364", "365", "366", "367"], 2),
    (77, General, Easy, "What is the capital of Japan?", ["Beijing", "Seoul", "Tokyo", "Bangkok"], 2),
    (78, General, Easy, "How many colors are in a rainbow?", ["5", "6", "7", "8"], 2),
    (79, General, Easy, "What is the largest mammal?", ["Elephant", "Blue Whale", "Giraffe", "Hippopotamus"], 1),
    (80, General, Easy, "How many sides does a hexagon have?", ["5", "6", "7", "8"], 1),
    (81, General, Medium, "What is the hardest natural substance?", ["Platinum", "Titanium", "Diamond", "Tungsten"], 2),
    (82, General, Medium, "Which planet has the most moons?", ["Jupiter", "Saturn", "Uranus", "Neptune"], 1),
    (83, General, Medium, "What is the smallest prime number?", ["0", "1", "2", "3"], 2),
    (84, General, Medium, "In what year was the Internet invented?", ["1969", "1975", "1983", "1991"], 0),
    (85, General, Medium, "What is the currency of Switzerland?", ["Euro", "Swiss Franc", "Swiss Mark", "Swiss Dollar"], 1),
    (86, General, Hard, "What is the fear of long words called?", ["Logophobia", "Hippopotomonstrosesquippedaliophobia", "Verbophobia", "Glossophobia"], 1),
    (87, General, Hard, "How many keys does a standard piano have?", ["76", "82", "88", "92"], 2),
    (88, General, Hard, "What is the only mammal capable of true flight?", ["Flying Squirrel", "Sugar Glider", "Bat", "Colugo"], 2),
    (89, General, Hard, "Which element has the chemical symbol \"Sb\"?", ["Silicon", "Antimony", "Silver", "Sodium"], 1),
    (90, General, Hard, "What is the longest bone in the human body?", ["Tibia", "Humerus", "Femur", "Fibula"], 2),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_bank_has_five_questions_per_pair() {
        for category in Category::ALL {
            for difficulty in Difficulty::ALL {
                assert_eq!(StaticBank.questions_for(category, difficulty).len(), 5);
            }
        }
        assert_eq!(StaticBank.len(), 90);
    }

    #[test]
    fn test_bank_ids_unique_and_answers_in_range() {
        let ids: HashSet<u32> = BANK.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), BANK.len());
        for q in BANK.iter() {
            assert!(q.correct_answer < OPTIONS_PER_QUESTION);
            assert_eq!(q.time_limit, q.difficulty.time_per_question());
        }
    }

    #[test]
    fn test_questions_for_keeps_declaration_order() {
        let ids: Vec<u32> = StaticBank
            .questions_for(Science, Easy)
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sample_length_is_min_of_count_and_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for category in Category::ALL {
            for difficulty in Difficulty::ALL {
                let pool = StaticBank.questions_for(category, difficulty).len();
                for count in [0, 1, 3, 5, 8] {
                    let drawn = StaticBank.sample(category, difficulty, count, &mut rng);
                    assert_eq!(drawn.len(), count.min(pool));
                }
            }
        }
    }

    #[test]
    fn test_sample_draws_members_without_duplicates() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool: HashSet<u32> = StaticBank
            .questions_for(History, Hard)
            .iter()
            .map(|q| q.id)
            .collect();

        for _ in 0..20 {
            let drawn = StaticBank.sample(History, Hard, 5, &mut rng);
            let ids: HashSet<u32> = drawn.iter().map(|q| q.id).collect();
            assert_eq!(ids.len(), drawn.len());
            assert!(ids.is_subset(&pool));
        }
    }

    #[test]
    fn test_sample_reaches_every_first_position() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut firsts = HashSet::new();
        for _ in 0..200 {
            let drawn = StaticBank.sample(Sports, Medium, 5, &mut rng);
            firsts.insert(drawn[0].id);
        }
        assert_eq!(firsts.len(), 5);
    }

    #[test]
    fn test_category_info_lookup() {
        assert_eq!(categories().len(), 6);
        assert_eq!(category_info(General).name, "General Knowledge");
        assert_eq!(category_info(Geography).icon, "🌍");
    }
}
